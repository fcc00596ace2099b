//! Basic dispatcher walkthrough: multi and once registration, argument
//! forwarding, and removal.
//!
//! Run with `cargo run --example basic -p beacon`.

use beacon::{Args, Registry, args};

fn main() {
    let mut registry = Registry::new();

    registry.on("door:open", |args: &Args| {
        let room = args.get::<&str>(0).copied().unwrap_or("somewhere");
        let count = args.get::<u32>(1).copied().unwrap_or(1);
        println!("door opened in {room} ({count} people walked through)");
    });

    registry.once("door:open", |_: &Args| {
        println!("first door of the day!");
    });

    // Both handlers fire here, multi first.
    registry.emit("door:open", &args!["kitchen", 2u32]);

    // Only the multi handler remains.
    registry.emit("door:open", &args!["hallway", 1u32]);

    registry.off("door:open");

    // Silent no-op: nothing is registered any more.
    registry.emit("door:open", &args!["garage", 1u32]);

    println!("handlers left: {}", registry.handler_count("door:open"));
}
