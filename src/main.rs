use std::io::{self, Read};

use vdump::{from_env, from_json_str, render_with_theme, Notation, Target, Theme, TreeTheme};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("vdump - Render value trees as colored text, HTML or SVG");
        println!();
        println!("Usage: vdump [OPTIONS] [JSON]");
        println!();
        println!("Reads a JSON document from argument or stdin and renders it.");
        println!();
        println!("Options:");
        println!("  -h, --help           Show this help message");
        println!("  -n, --notation <N>   json or yaml (default: json)");
        println!("  -t, --target <T>     text, html or svg (default: text)");
        println!("      --theme <NAME>   default or dark");
        println!("      --env            Render the process environment instead of input");
        println!();
        println!("Example:");
        println!("  echo '{{\"a\": \"1\"}}' | vdump -n yaml -t svg");
        println!("  vdump --env -t html > env.html");
        return;
    }

    let notation = match flag_value(&args, &["-n", "--notation"]) {
        Some(value) => match Notation::from_str(&value) {
            Some(notation) => notation,
            None => {
                eprintln!("Error: unknown notation: {}", value);
                std::process::exit(1);
            }
        },
        None => Notation::Json,
    };

    let target = match flag_value(&args, &["-t", "--target"]) {
        Some(value) => match Target::from_str(&value) {
            Some(target) => target,
            None => {
                eprintln!("Error: unknown target: {}", value);
                std::process::exit(1);
            }
        },
        None => Target::TextAnsi,
    };

    let theme = flag_value(&args, &["--theme"])
        .map(|value| TreeTheme::from_str(&value))
        .unwrap_or(TreeTheme::Default);

    let tree = if args.iter().any(|a| a == "--env") {
        from_env()
    } else {
        // Get input from argument or stdin
        let input = positional(&args).unwrap_or_else(|| {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Failed to read from stdin");
            buf
        });

        if input.trim().is_empty() {
            eprintln!("Error: No input provided");
            std::process::exit(1);
        }

        match from_json_str(&input) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    match render_with_theme(&tree, notation, target, &Theme::from_theme(theme)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Value of a flag given as `-x value` or `--long value`
fn flag_value(args: &[String], names: &[&str]) -> Option<String> {
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

/// First argument that is neither a flag nor a flag's value
fn positional(args: &[String]) -> Option<String> {
    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-n" || arg == "--notation" || arg == "-t" || arg == "--target" || arg == "--theme"
        {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            return Some(arg.clone());
        }
    }
    None
}
