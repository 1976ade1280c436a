use error_trail::prelude::*;
use error_trail::{arg, prefix, style, Style};

const NOT_FOUND: Const = Const("record not found");

fn read_config(path: &str) -> Result<String, Trail> {
    // Annotate a standard error in place
    std::fs::read_to_string(path).trail(&arg("path", path.to_string()).prefix("reading config"))
}

fn find_user(id: u64) -> Result<String, Trail> {
    if id == 0 {
        bail!(arg("user_id", id); NOT_FOUND);
    }
    Ok(format!("user_{id}"))
}

fn load_profile(id: u64) -> Result<String, Trail> {
    // Each layer adds its own frame and text
    find_user(id).trail(&prefix("loading profile").arg("layer", "service"))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Wrapping a std error
    println!("\n1. Wrapping a std error:");
    match read_config("does-not-exist.toml") {
        Ok(_) => println!("Success!"),
        Err(e) => println!("Error: {e}\nFrames: {:?}", e.frames()),
    }

    // 2. Layers and identity
    println!("\n2. Layers and identity:");
    if let Err(e) = load_profile(0) {
        println!("Error: {e}");
        println!("Is NOT_FOUND: {}", is(&e, &NOT_FOUND));
        println!("user_id: {:?}", e.value("user_id"));
        for record in e.records() {
            println!("- {record:?}");
        }
    }

    // 3. Function names instead of file:line
    println!("\n3. Function names:");
    let err = style(Style::ShortFunction).new_error("timeout");
    println!("{} at {}", err, err.frames()[0].location());

    // 4. logfmt attribute for plain log lines
    println!("\n4. Log attribute:");
    let err = errorf!(arg("attempt", 3); "gave up after {} attempts", 3);
    println!("{}", err.attr());
}
