use yew::NodeRef;

use crate::content::{PanelDescriptor, PANELS};

#[derive(Clone, PartialEq)]
pub struct StageRefs {
    pub wrapper: NodeRef,
    pub track: NodeRef,
    pub progress: NodeRef,
    pub frame: NodeRef,
    pub cursor: NodeRef,
    pub panels: Vec<PanelRefs>,
}

#[derive(Clone, PartialEq)]
pub struct PanelRefs {
    pub descriptor: PanelDescriptor,
    pub section: NodeRef,
    pub parallax: NodeRef,
    pub hover_targets: Vec<NodeRef>,
}

impl PanelRefs {
    fn new(descriptor: PanelDescriptor) -> Self {
        Self {
            descriptor,
            section: NodeRef::default(),
            parallax: NodeRef::default(),
            hover_targets: descriptor
                .hover_labels
                .iter()
                .map(|_| NodeRef::default())
                .collect(),
        }
    }

    pub fn hover_target(&self, index: usize) -> NodeRef {
        self.hover_targets.get(index).cloned().unwrap_or_default()
    }
}

impl StageRefs {
    pub fn new() -> Self {
        Self {
            wrapper: NodeRef::default(),
            track: NodeRef::default(),
            progress: NodeRef::default(),
            frame: NodeRef::default(),
            cursor: NodeRef::default(),
            panels: PANELS.iter().copied().map(PanelRefs::new).collect(),
        }
    }
}
