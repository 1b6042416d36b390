pub mod contact;
pub mod header;
pub mod nav;
pub mod reveal;

pub use contact::wire_contact_form;
pub use header::wire_header_scroll;
pub use nav::wire_smooth_scroll;
pub use reveal::wire_reveal;
