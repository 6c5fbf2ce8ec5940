//! User actions applied to the hotbar set.

use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};
use hotbar_core::{HotbarCreateOptions, HotbarId, HotbarManager, ItemParams, ItemRef};
use std::io::Write;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every hotbar and its slots
    List,
    /// Pin an entity to the active hotbar
    Add {
        /// Catalog uid of the entity
        uid: String,
        /// Slot to place the entity in (default: first empty slot)
        #[arg(long)]
        cell: Option<usize>,
        /// Item parameter as KEY=VALUE (repeatable)
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Unpin an entity from the active hotbar
    Remove {
        /// Catalog uid of the entity
        uid: String,
    },
    /// Drag the slot at FROM to TO in the active hotbar
    Move {
        #[arg(allow_negative_numbers = true)]
        from: isize,
        #[arg(allow_negative_numbers = true)]
        to: isize,
    },
    /// Create a new hotbar
    Create {
        name: String,
    },
    /// Delete a hotbar by id
    Delete {
        id: String,
    },
    /// Rename a hotbar
    Rename {
        id: String,
        name: String,
    },
    /// Change the active hotbar
    Switch {
        /// `next`, `previous`, or a hotbar id
        target: String,
    },
    /// Write the current configuration to the config path
    InitConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwitchDirection {
    Next,
    Previous,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

/// Apply `command` to `manager`, writing human-readable output to `out`.
pub fn apply<W: Write>(command: &Command, manager: &mut HotbarManager, out: &mut W) -> Result<()> {
    match command {
        Command::List => list(manager, out)?,
        Command::Add { uid, cell, params } => {
            let mut item = ItemRef::new(uid.clone());
            if !params.is_empty() {
                item.params = Some(params.iter().cloned().collect::<ItemParams>());
            }
            match manager.add_item(item, *cell) {
                Some(index) => writeln!(out, "pinned {uid} at slot {index}")?,
                None => writeln!(out, "{uid} not pinned")?,
            }
        }
        Command::Remove { uid } => {
            if let Some(index) = manager.remove_item(uid) {
                writeln!(out, "unpinned {uid} from slot {index}")?;
            }
        }
        Command::Move { from, to } => {
            if manager.restack_items(*from, *to)? {
                writeln!(out, "moved slot {from} to {to}")?;
            }
        }
        Command::Create { name } => {
            let hotbar = manager.create(HotbarCreateOptions::named(name.clone()));
            writeln!(out, "created {} ({})", hotbar.name(), hotbar.id())?;
        }
        Command::Delete { id } => {
            if let Some(removed) = manager.remove(&HotbarId::from(id.as_str()))? {
                writeln!(out, "deleted {} ({})", removed.name(), removed.id())?;
            }
        }
        Command::Rename { id, name } => {
            manager.rename(&HotbarId::from(id.as_str()), name.clone())?;
        }
        Command::Switch { target } => {
            match SwitchDirection::from_str(target, true) {
                Ok(SwitchDirection::Next) => manager.switch_to_next(),
                Ok(SwitchDirection::Previous) => manager.switch_to_previous(),
                Err(_) => {
                    if !manager.set_active(&HotbarId::from(target.as_str())) {
                        bail!("no hotbar with id {target}");
                    }
                }
            }
            let active = manager.active();
            writeln!(out, "active: {} ({})", active.name(), active.id())?;
        }
        Command::InitConfig => bail!("init-config is handled before the store is loaded"),
    }
    Ok(())
}

fn list<W: Write>(manager: &HotbarManager, out: &mut W) -> Result<()> {
    for hotbar in manager.hotbars() {
        let marker = if hotbar.id() == manager.active_id() {
            "*"
        } else {
            " "
        };
        writeln!(out, "{marker} {} ({})", hotbar.name(), hotbar.id())?;
        for (index, slot) in hotbar.slots().iter().enumerate() {
            match slot {
                Some(item) => writeln!(out, "    {index:>2}: {}", item.uid)?,
                None => writeln!(out, "    {index:>2}: -")?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command, manager: &mut HotbarManager) -> Result<String> {
        let mut out = Vec::new();
        apply(&command, manager, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn add_with_params_pins_into_active() {
        let mut manager = HotbarManager::new();
        let output = run(
            Command::Add {
                uid: "minikube".into(),
                cell: None,
                params: vec![("namespace".into(), "default".into())],
            },
            &mut manager,
        )
        .unwrap();
        assert_eq!(output, "pinned minikube at slot 0\n");
        let item = manager.active().slots().get(0).unwrap();
        assert_eq!(item.params.as_ref().unwrap()["namespace"], "default");
    }

    #[test]
    fn silent_noops_print_nothing() {
        let mut manager = HotbarManager::new();
        manager.take_events();
        let output = run(Command::Remove { uid: "ghost".into() }, &mut manager).unwrap();
        assert!(output.is_empty());
        let output = run(Command::Move { from: 2, to: 2 }, &mut manager).unwrap();
        assert!(output.is_empty());
        assert!(!manager.is_dirty());
    }

    #[test]
    fn invalid_move_is_an_error() {
        let mut manager = HotbarManager::new();
        assert!(run(Command::Move { from: -1, to: 0 }, &mut manager).is_err());
    }

    #[test]
    fn deleting_last_hotbar_fails() {
        let mut manager = HotbarManager::new();
        let id = manager.active_id().to_string();
        assert!(run(Command::Delete { id }, &mut manager).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn switch_accepts_direction_or_id() {
        let mut manager = HotbarManager::new();
        let second = manager
            .create(HotbarCreateOptions::named("Second"))
            .id()
            .to_string();

        let output = run(Command::Switch { target: "next".into() }, &mut manager).unwrap();
        assert!(output.starts_with("active: Second"));
        run(Command::Switch { target: "previous".into() }, &mut manager).unwrap();
        assert_eq!(manager.active().name(), "Default");

        run(Command::Switch { target: second.clone() }, &mut manager).unwrap();
        assert_eq!(manager.active_id().as_str(), second);
        assert!(run(Command::Switch { target: "nope".into() }, &mut manager).is_err());
    }

    #[test]
    fn list_marks_active_hotbar() {
        let mut manager = HotbarManager::new();
        manager.add_item(ItemRef::new("minikube"), None);
        let output = run(Command::List, &mut manager).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("* Default"));
        assert_eq!(lines.next().unwrap(), "     0: minikube");
        assert_eq!(lines.next().unwrap(), "     1: -");
    }

    #[test]
    fn param_parser_requires_key() {
        assert_eq!(parse_param("a=b"), Ok(("a".into(), "b".into())));
        assert_eq!(parse_param("a=b=c"), Ok(("a".into(), "b=c".into())));
        assert!(parse_param("=b").is_err());
        assert!(parse_param("ab").is_err());
    }
}
