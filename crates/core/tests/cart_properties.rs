//! Property tests for cart quantity rules, pricing and templates.

use jiff::Timestamp;
use proptest::prelude::*;
use rust_decimal::Decimal;

use portal::prelude::*;

fn product(id: &str, unit_price: u32, markup: u32, moq: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        category: "General".to_string(),
        unit_price: Decimal::from(unit_price),
        list_price: Decimal::from(unit_price) + Decimal::from(markup),
        image_url: None,
        rating_estimate: None,
        in_stock: true,
        description: String::new(),
        promotions: Vec::new(),
        min_order_quantity: moq,
        unit: "units".to_string(),
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize, Option<u32>),
    Set(usize, u32),
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, proptest::option::of(0u32..200)).prop_map(|(i, q)| Op::Add(i, q)),
        (0usize..3, 0u32..200).prop_map(|(i, q)| Op::Set(i, q)),
        (0usize..3).prop_map(Op::Increment),
        (0usize..3).prop_map(Op::Decrement),
        (0usize..3).prop_map(Op::Remove),
        Just(Op::Clear),
    ]
}

fn catalog() -> [Product; 3] {
    [
        product("A", 420, 30, 50),
        product("B", 17, 3, 1),
        product("C", 1999, 0, 12),
    ]
}

proptest! {
    #[test]
    fn repeated_adds_sum_their_increments(increments in proptest::collection::vec(50u32..10_000, 1..20)) {
        let cement = product("A", 420, 30, 50);
        let mut cart = Cart::new();

        for increment in &increments {
            cart.add_or_increment(&cement, Some(*increment))?;
        }

        let expected: u32 = increments.iter().sum();

        prop_assert_eq!(cart.get(&cement.id).map(|item| item.quantity), Some(expected));
        prop_assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_below_minimum_never_changes_quantity(moq in 1u32..500, below in 0u32..500) {
        let below = below.min(moq - 1);
        let item = product("A", 10, 1, moq);
        let mut cart = Cart::new();
        cart.add_or_increment(&item, None)?;

        let result = cart.set_quantity(&item.id, below);

        prop_assert!(
            matches!(result, Err(CartError::BelowMinimum { .. })),
            "expected BelowMinimum, got {:?}",
            result
        );
        prop_assert_eq!(cart.get(&item.id).map(|line| line.quantity), Some(moq));
    }

    #[test]
    fn totals_stay_consistent_after_every_operation(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let products = catalog();
        let mut cart = Cart::new();

        for op in ops {
            // Rejected operations are expected; only the invariants matter here.
            _ = match op {
                Op::Add(i, quantity) => products
                    .get(i)
                    .map(|product| cart.add_or_increment(product, quantity).map(|_| ())),
                Op::Set(i, quantity) => products
                    .get(i)
                    .map(|product| cart.set_quantity(&product.id, quantity).map(|_| ())),
                Op::Increment(i) => products
                    .get(i)
                    .map(|product| cart.increment(&product.id).map(|_| ())),
                Op::Decrement(i) => products
                    .get(i)
                    .map(|product| cart.decrement(&product.id).map(|_| ())),
                Op::Remove(i) => products
                    .get(i)
                    .map(|product| cart.remove(&product.id).map(|_| ())),
                Op::Clear => {
                    cart.clear();
                    None
                }
            };

            prop_assert_eq!(cart.total(), cart.subtotal() + cart.tax());
            prop_assert!(cart.items().iter().all(|item| item.quantity >= item.min_order_quantity));
            prop_assert_eq!(cart.is_empty(), cart.state() == CartState::Empty);
        }
    }

    #[test]
    fn template_round_trip_reproduces_cart(quantities in proptest::collection::vec(1u32..20, 3)) {
        let products = catalog();
        let mut cart = Cart::new();

        for (product, multiple) in products.iter().zip(&quantities) {
            cart.add_or_increment(product, Some(product.min_order_quantity * multiple))?;
        }

        let mut templates = Templates::new();
        let id = TemplateId::now_v7();
        templates.save(id, "Round trip", &cart, Timestamp::now())?;

        let mut restored = Cart::new();
        templates.apply_to(id, &mut restored)?;

        prop_assert_eq!(restored, cart);
    }

    #[test]
    fn deleting_twice_matches_deleting_once(count in 1usize..5, target in 0usize..5) {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("A", 420, 30, 50), None)?;

        let mut templates = Templates::new();
        let mut ids = Vec::new();

        for n in 0..count {
            let id = TemplateId::now_v7();
            templates.save(id, &format!("Template {n}"), &cart, Timestamp::now())?;
            ids.push(id);
        }

        let id = ids.get(target).copied().unwrap_or_else(TemplateId::now_v7);

        let mut once = templates.clone();
        once.delete(id);

        let mut twice = templates.clone();
        twice.delete(id);
        twice.delete(id);

        prop_assert_eq!(once, twice);
    }
}
