use colored::*;
use std::path::Path;

pub fn print_step(message: &str) {
    println!("{} {}", "[*]".bright_blue().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "[+]".green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "[!]".yellow().bold(), message);
}

pub fn print_no_open_ports() {
    print_warning("No open ports detected in the initial scan.");
}

pub fn ports_done_message(ports: &str) -> String {
    format!("Second Nmap scan completed successfully on ports: {}", ports)
}

pub fn print_ports_done(ports: &str) {
    print_success(&ports_done_message(ports));
}

pub fn print_summary(root: &Path) {
    println!(
        "\n{}",
        format!(
            "Directory structure '{}' created and Nmap scans completed successfully.",
            root.display()
        )
        .green()
        .bold()
    );
}
