//! Navigation bar state (menu toggle, scrolled style, item selection).

pub mod navigation_bar;
