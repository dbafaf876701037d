pub mod map_marker;
pub mod map_marker_popup;
pub mod map_renderer;
pub mod map_wrapper;
pub mod place_card;
pub mod place_form;
pub mod util;
