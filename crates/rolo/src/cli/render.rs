//! Turns engine results into terminal text.
//!
//! Listed persons come first, one per line as `N. <person>`, followed by the
//! message. Rendering never touches stdout itself; `commands.rs` prints.

use super::styles;
use roloapp::commands::CmdResult;
use roloapp::index::DisplayPerson;

pub const WELCOME: &str = "Welcome to your Address Book!";
pub const GOODBYE: &str = "Good bye!";
pub const DIVIDER: &str = "===================================================";
pub const PROMPT: &str = "Enter command: ";

pub fn render_listing(persons: &[DisplayPerson]) -> String {
    persons
        .iter()
        .map(|p| {
            format!(
                "{} {}\n",
                styles::list_index().apply_to(format!("{}.", p.index)),
                p.render()
            )
        })
        .collect()
}

pub fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(listed) = &result.listed {
        out.push_str(&render_listing(listed));
    }
    let style = styles::for_message(result.message.level, result.status);
    out.push_str(&format!("{}\n", style.apply_to(&result.message.content)));
    out
}

pub fn render_welcome(storage_path: &str) -> String {
    let banner = styles::banner();
    format!(
        "{}\n{}\n{}\n{}\n",
        banner.apply_to(DIVIDER),
        banner.apply_to(WELCOME),
        styles::muted().apply_to(format!("Using storage file : {}", storage_path)),
        banner.apply_to(DIVIDER),
    )
}

pub fn render_goodbye() -> String {
    format!("{}\n", styles::banner().apply_to(GOODBYE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roloapp::commands::{CmdMessage, Status};
    use roloapp::model::{RawPerson, Visibility};

    fn john(private: bool) -> DisplayPerson {
        let person = RawPerson {
            name: "John Doe".into(),
            phone: "98765432".into(),
            phone_private: private,
            email: "john@x.com".into(),
            address: "1 Main St".into(),
            ..RawPerson::default()
        }
        .validate()
        .unwrap();
        DisplayPerson {
            index: 1,
            person,
            visibility: Visibility::Public,
        }
    }

    #[test]
    fn listing_is_numbered() {
        console::set_colors_enabled(false);
        let out = render_listing(&[john(false)]);
        assert!(out.starts_with("1. John Doe"));
        assert!(out.contains("98765432"));
    }

    #[test]
    fn public_listing_hides_private_fields() {
        console::set_colors_enabled(false);
        let out = render_listing(&[john(true)]);
        assert!(!out.contains("98765432"));
    }

    #[test]
    fn message_follows_listing() {
        console::set_colors_enabled(false);
        let result = CmdResult::new(CmdMessage::info("1 persons listed!")).with_listed(vec![john(false)]);
        let out = render_result(&result);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1 persons listed!");
    }

    #[test]
    fn failures_render_their_message() {
        console::set_colors_enabled(false);
        let mut result = CmdResult::new(CmdMessage::error("The person index provided is invalid"));
        result.status = Status::Failed;
        assert_eq!(render_result(&result), "The person index provided is invalid\n");
    }

    #[test]
    fn welcome_names_storage_file() {
        console::set_colors_enabled(false);
        let out = render_welcome("/tmp/book.json");
        assert!(out.contains(WELCOME));
        assert!(out.contains("Using storage file : /tmp/book.json"));
    }
}
