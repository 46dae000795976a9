use clap::{Args, Subcommand};
use portal::prelude::TemplateId;
use portal_app::context::AppContext;

use super::{
    error::{CommandError, failed},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct TemplateCommand {
    #[command(subcommand)]
    command: TemplateSubcommand,
}

#[derive(Debug, Subcommand)]
enum TemplateSubcommand {
    /// Save the current cart as a template
    Save(SaveTemplateArgs),

    /// List saved templates
    List,

    /// Rename a template
    Rename(RenameTemplateArgs),

    /// Delete a template
    Delete(TemplateArgs),

    /// Add a template's items to the current cart
    Apply(TemplateArgs),
}

#[derive(Debug, Args)]
struct SaveTemplateArgs {
    /// Template name
    name: String,
}

#[derive(Debug, Args)]
struct RenameTemplateArgs {
    /// Template id
    id: TemplateId,

    /// New template name
    name: String,
}

#[derive(Debug, Args)]
struct TemplateArgs {
    /// Template id
    id: TemplateId,
}

pub(crate) fn run(app: &AppContext, command: TemplateCommand) -> Result<(), CommandError> {
    match command.command {
        TemplateSubcommand::Save(args) => {
            let template = app
                .templates
                .save_current(&args.name)
                .map_err(failed("failed to save template"))?;

            println!("template_id: {}", template.id());
            println!("template_name: {}", template.name());
            Ok(())
        }
        TemplateSubcommand::List => {
            let templates = app
                .templates
                .list()
                .map_err(failed("failed to list templates"))?;

            if templates.is_empty() {
                println!("no saved templates");
                return Ok(());
            }

            println!("{}", render::templates(&templates));
            Ok(())
        }
        TemplateSubcommand::Rename(args) => {
            let template = app
                .templates
                .rename(args.id, &args.name)
                .map_err(failed("failed to rename template"))?;

            println!("template {} renamed to {}", template.id(), template.name());
            Ok(())
        }
        TemplateSubcommand::Delete(args) => {
            let deleted = app
                .templates
                .delete(args.id)
                .map_err(failed("failed to delete template"))?;

            if deleted {
                println!("template {} deleted", args.id);
            } else {
                println!("template {} not found; nothing deleted", args.id);
            }
            Ok(())
        }
        TemplateSubcommand::Apply(args) => {
            let cart = app
                .templates
                .apply(args.id)
                .map_err(failed("failed to apply template"))?;

            println!("{}", render::cart_items(cart.items()));
            println!("{}", render::totals(&cart.totals()));
            Ok(())
        }
    }
}
