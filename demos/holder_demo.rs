use anyhow::Result;
use holdall::prelude::*;

fn main() -> Result<()> {
    let mut int_holder = Holder::new();
    int_holder.set(1);

    let mut string_holder = Holder::new();
    string_holder.set("hello");

    println!(
        "int holder: {:?}, string holder: {:?}",
        int_holder.get(),
        string_holder.get()
    );

    Ok(())
}
