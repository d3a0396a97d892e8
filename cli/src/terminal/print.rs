use std::fmt::Display;

use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Width the `label:` column is padded to.
const LABEL_WIDTH: usize = 28;

/// Width of the dotted key column in trees.
const TREE_KEY_WIDTH: usize = 7;

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// `label:` padded to a fixed column, then the value.
pub fn format_labelled<V: Display>(label: &str, value: V) -> String {
    let key: String = format!("{label}:");
    let padding: String = " ".repeat(LABEL_WIDTH.saturating_sub(key.chars().count()));
    format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        padding,
        value.to_string().color(colors::DUID_VALUE)
    )
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}
