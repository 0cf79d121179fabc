pub mod accordion;
pub mod animation;
pub mod counter;
pub mod form;
pub mod menu;
pub mod nav;
pub mod number_format;
pub mod scroll;
pub mod typewriter;

use accordion::Accordion;
use animation::AnimationFlags;
use menu::MobileMenu;
use nav::NavHighlight;

#[derive(Debug, Default)]
pub struct ViewState {
    pub nav: NavHighlight,
    pub accordion: Accordion,
    pub menu: MobileMenu,
    pub reveals: AnimationFlags,
    pub counters: AnimationFlags,
}
