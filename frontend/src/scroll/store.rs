use std::rc::Rc;

use yew::prelude::*;

use super::registry::SectionId;

/// Published "current section" shared with every component under the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurrentSection {
    pub section: SectionId,
}

pub enum SectionAction {
    Publish(usize),
}

impl Reducible for CurrentSection {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SectionAction::Publish(index) => {
                let section = SectionId::from_index(index);
                if section == self.section {
                    self
                } else {
                    Rc::new(Self { section })
                }
            }
        }
    }
}

/// Read/command handle handed to presentation components.
#[derive(Clone, PartialEq)]
pub struct SectionContext {
    pub current: SectionId,
    pub navigate: Callback<SectionId>,
}

impl Default for SectionContext {
    fn default() -> Self {
        Self {
            current: SectionId::Home,
            navigate: Callback::noop(),
        }
    }
}

/// Current section and navigation callback; falls back to an inert
/// context when rendered outside the provider.
#[hook]
pub fn use_section_context() -> SectionContext {
    use_context::<SectionContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishing_same_section_keeps_state() {
        let state = Rc::new(CurrentSection::default());
        let next = state.clone().reduce(SectionAction::Publish(0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn publishing_clamps_index() {
        let state = Rc::new(CurrentSection::default());
        let next = state.reduce(SectionAction::Publish(17));
        assert_eq!(next.section, SectionId::Contact);
    }
}
