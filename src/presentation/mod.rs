mod components;
mod view;

pub(crate) use view::{OverlayRender, UiContext, draw};
