//! Builds a burger order with a pipeline and prints it.
//!
//! Stage events are logged through `tracing`; run with
//! `RUST_LOG=pipes=trace cargo run --example whopper` to see them.

use pipes::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Ingredient {
    name: &'static str,
    quantity: u32,
}

const fn ingredient(name: &'static str, quantity: u32) -> Ingredient {
    Ingredient { name, quantity }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pipes=info")))
        .init();

    let whopper = vec![
        ingredient("bun", 2),
        ingredient("patty", 1),
        ingredient("pickles", 5),
        ingredient("lettuce", 3),
        ingredient("ketchup", 1),
        ingredient("onion", 4),
    ];

    let extra = |wanted: &'static [&'static str]| {
        chain!(
            filter(move |item: &Ingredient| wanted.contains(&item.name)),
            map(|item: Ingredient| ingredient(item.name, item.quantity * 2)),
            sort_by_key(|item: &Ingredient| item.quantity),
            map(|item: Ingredient| format!("{}({})", item.name, item.quantity)),
            reduce_first(|left: String, right: String| format!("{left}\n{right}")),
        )
    };

    match whopper.clone().pipe(extra(&["pickles"])) {
        Ok(order) => println!("extra pickles:\n{order}\n"),
        Err(error) => eprintln!("extra pickles: {error}"),
    }

    match whopper.clone().pipe(extra(&["onion", "lettuce", "pickles"])) {
        Ok(order) => println!("extra veggies:\n{order}\n"),
        Err(error) => eprintln!("extra veggies: {error}"),
    }

    match whopper.clone().pipe(extra(&["bacon"])) {
        Ok(order) => println!("extra bacon:\n{order}\n"),
        Err(error) => eprintln!("extra bacon: {error}"),
    }

    let units = whopper.pipe(fold(0, |total: u32, item: Ingredient| total + item.quantity));
    println!("{units} units in a standard whopper");
}
