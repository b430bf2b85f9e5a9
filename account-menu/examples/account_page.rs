//! Scripted walk through the account dropdown.
//!
//! Pass a TOML config path as the first argument to override the defaults.
//! Logs go to `account_page.log`.

use std::fs::File;

use account_menu::{DropdownConfig, DropdownController};
use pagedom::{Document, Element};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("account_page.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let config = match std::env::args().nth(1) {
        Some(path) => DropdownConfig::load(path)?,
        None => DropdownConfig::default(),
    };

    let mut doc = Document::new(page());
    let pending = DropdownController::attach_on_load(&mut doc, config);
    doc.finish_loading();
    let Some(result) = pending.take() else {
        return Err("attach did not run".into());
    };
    let controller = result?;

    for target in ["account", "menu-note", "content", "account", "account", "account", "home"] {
        let outcome = doc.click(target);
        let classes = doc
            .class_list(controller.panel_id())
            .map(|classes| classes.to_string())
            .unwrap_or_default();
        println!(
            "click {target:<10} -> {:?} (panel class=\"{classes}\", navigated={:?})",
            controller.visibility(),
            outcome.navigated_to
        );
    }

    controller.detach();
    Ok(())
}

fn page() -> Element {
    Element::body()
        .id("body")
        .child(
            Element::div()
                .id("header")
                .child(Element::link("/budgets/").id("home").child(Element::text("Budgets")))
                .child(Element::link("#").id("account").class("account-link").child(Element::text("Account")))
                .child(
                    Element::div()
                        .id("menu")
                        .class("account-dropdown")
                        .child(Element::link("/accounts/profile/").child(Element::text("Profile")))
                        .child(Element::link("/accounts/logout/").child(Element::text("Logout")))
                        .child(Element::text("Signed in").id("menu-note")),
                ),
        )
        .child(Element::div().id("main").child(Element::text("Team budget").id("content")))
}
