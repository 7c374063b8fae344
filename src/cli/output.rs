use std::fmt;

use colored::Colorize;

pub fn header(title: impl fmt::Display) {
    println!("\n{}", format!("=== {title} ===").bold());
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", message.to_string().red());
}
