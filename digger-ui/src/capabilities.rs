//! Capability-gated resolution of per-album action controls.
//!
//! Each view declares which of the four pipeline actions it offers; the
//! resolver decides, per album, which controls render and whether they are
//! enabled. An action a view does not declare is never produced at all.

use digger_core::AlbumAction;

/// Render order of the controls in a button group.
const RENDER_ORDER: [AlbumAction; 4] = [
    AlbumAction::Add,
    AlbumAction::Remove,
    AlbumAction::Download,
    AlbumAction::Upload,
];

/// The set of actions a view permits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionCapabilitySet {
    add: bool,
    remove: bool,
    download: bool,
    upload: bool,
}

impl ActionCapabilitySet {
    pub const fn none() -> Self {
        Self {
            add: false,
            remove: false,
            download: false,
            upload: false,
        }
    }

    pub const fn with(mut self, action: AlbumAction) -> Self {
        match action {
            AlbumAction::Add => self.add = true,
            AlbumAction::Remove => self.remove = true,
            AlbumAction::Download => self.download = true,
            AlbumAction::Upload => self.upload = true,
        }
        self
    }

    pub const fn contains(&self, action: AlbumAction) -> bool {
        match action {
            AlbumAction::Add => self.add,
            AlbumAction::Remove => self.remove,
            AlbumAction::Download => self.download,
            AlbumAction::Upload => self.upload,
        }
    }
}

/// One renderable action control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionControl {
    pub action: AlbumAction,
    pub enabled: bool,
}

/// Resolve the controls for one album.
///
/// Add and Remove both reflect the same "already queued" condition: once an
/// album is ready_to_add, neither may be dispatched again until the backend
/// state changes. Download and Upload are unaffected by it.
pub fn resolve_actions(caps: &ActionCapabilitySet, ready_to_add: bool) -> Vec<ActionControl> {
    RENDER_ORDER
        .into_iter()
        .filter(|action| caps.contains(*action))
        .map(|action| ActionControl {
            action,
            enabled: match action {
                AlbumAction::Add | AlbumAction::Remove => !ready_to_add,
                AlbumAction::Download | AlbumAction::Upload => true,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(controls: &[ActionControl]) -> Vec<AlbumAction> {
        controls.iter().map(|c| c.action).collect()
    }

    #[test]
    fn absent_actions_are_never_emitted() {
        for ready in [false, true] {
            assert!(resolve_actions(&ActionCapabilitySet::none(), ready).is_empty());

            let caps = ActionCapabilitySet::none().with(AlbumAction::Download);
            let controls = resolve_actions(&caps, ready);
            assert_eq!(actions(&controls), [AlbumAction::Download]);
        }
    }

    #[test]
    fn add_is_disabled_once_queued() {
        let caps = ActionCapabilitySet::none().with(AlbumAction::Add);
        let controls = resolve_actions(&caps, true);
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].action, AlbumAction::Add);
        assert!(!controls[0].enabled);

        let controls = resolve_actions(&caps, false);
        assert!(controls[0].enabled);
    }

    #[test]
    fn add_and_remove_gate_together() {
        let caps = ActionCapabilitySet::none()
            .with(AlbumAction::Add)
            .with(AlbumAction::Remove);
        let controls = resolve_actions(&caps, true);
        assert!(controls.iter().all(|c| !c.enabled));
    }

    #[test]
    fn download_and_upload_ignore_ready_flag() {
        let caps = ActionCapabilitySet::none()
            .with(AlbumAction::Remove)
            .with(AlbumAction::Download)
            .with(AlbumAction::Upload);
        let controls = resolve_actions(&caps, true);
        assert_eq!(
            actions(&controls),
            [AlbumAction::Remove, AlbumAction::Download, AlbumAction::Upload]
        );
        assert!(!controls[0].enabled);
        assert!(controls[1].enabled);
        assert!(controls[2].enabled);
    }

    #[test]
    fn controls_follow_render_order() {
        let caps = ActionCapabilitySet::none()
            .with(AlbumAction::Upload)
            .with(AlbumAction::Add);
        let controls = resolve_actions(&caps, false);
        assert_eq!(actions(&controls), [AlbumAction::Add, AlbumAction::Upload]);
    }
}
