//! Host-side navigation over the registered scenes
//!
//! The core only exposes scene ids and the active id; ordering policy
//! (start, next, previous, home) lives here in the host.

use glimpse_core::prelude::*;

/// Navigation request from the user (or the scripted tour)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Leave home for the first scene
    Start,
    /// Next scene, wrapping around
    Next,
    /// Previous scene, wrapping around
    Previous,
    /// Back to the idle home view
    Home,
}

/// Id the command leads to, given the navigation order and the active id
///
/// `None` means home. Next/previous from home behave like `Start`.
pub fn resolve<'a>(order: &[&'a str], active: Option<&str>, command: NavCommand) -> Option<&'a str> {
    if order.is_empty() {
        return None;
    }
    let current = active.and_then(|id| order.iter().position(|candidate| *candidate == id));

    match (command, current) {
        (NavCommand::Home, _) => None,
        (NavCommand::Start, _) | (NavCommand::Next | NavCommand::Previous, None) => Some(order[0]),
        (NavCommand::Next, Some(index)) => Some(order[(index + 1) % order.len()]),
        (NavCommand::Previous, Some(index)) => Some(order[(index + order.len() - 1) % order.len()]),
    }
}

/// Apply a navigation command to the manager
pub fn navigate(manager: &mut SceneManager, command: NavCommand) -> ShowcaseResult<()> {
    let target = {
        let order = manager.scene_ids();
        resolve(&order, manager.active_scene_id(), command).map(str::to_string)
    };
    log::debug!("Navigation {:?} -> {:?}", command, target);
    manager.set_active_scene(target.as_deref())
}
