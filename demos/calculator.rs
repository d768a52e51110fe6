//! Integer calculator driven by a declarative registry.
//!
//! ```text
//! cargo run --example calculator -- 6 [*] 7 -v
//! cargo run --example calculator -- -v 6 [*] 7
//! ```

use std::process::ExitCode;

use scmdp::Registry;

fn main() -> ExitCode {
    let mut registry = Registry::new(
        "USAGE: CALC NUM1 ACT NUM2  [-OPTIONS]\nOR: CALC [-OPTIONS] NUM1 ACT NUM2",
        "Calculate something with two numbers",
    );
    let slots = registry.set_help_trigger("--help", "-h").and_then(|()| {
        Ok((
            registry.add_positional("NUM1", "First integer number")?,
            registry.add_positional("ACT", "Type the ACTION\nAVAILABLE: [+], [-], [/], [*]")?,
            registry.add_positional("NUM2", "Second integer number")?,
            registry.add_optional("--verbose", "-v", "Duplicates the operation with words", "")?,
        ))
    });
    let Ok((num1, act, num2, verbose)) = slots else {
        eprintln!("calculator: conflicting argument registration");
        return ExitCode::FAILURE;
    };

    let Ok(bindings) = registry.parse_env() else {
        return ExitCode::SUCCESS;
    };

    let (Ok(a), Ok(b)) = (
        bindings.get_or(num1, "").parse::<i64>(),
        bindings.get_or(num2, "").parse::<i64>(),
    ) else {
        println!("NOT A NUMBER!");
        return ExitCode::FAILURE;
    };
    let verbose = bindings.is_set(verbose);

    let (result, words) = match bindings.get_or(act, "") {
        "[+]" => (a.checked_add(b), "The sum of"),
        "[-]" => (a.checked_sub(b), "Residual of"),
        "[*]" => (a.checked_mul(b), "Multiplication of"),
        "[/]" if b == 0 => {
            println!("DIVIDING BY ZERO!");
            return ExitCode::FAILURE;
        }
        "[/]" => (a.checked_div(b), "Dividing of"),
        _ => {
            println!("UNKNOWN ACTION!");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Some(value) if verbose => println!("{} {} and {} is {}", words, a, b, value),
        Some(value) => println!("Result: {}", value),
        None => {
            println!("OVERFLOW!");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
