//! DOM Utility Layer
//!
//! The renderer never touches a document directly. Every page mutation
//! (region contents, visibility, image sizing, link targets, scrolling and
//! code pretty-printing) goes through [`DomUtility`], so a browser binding and
//! the in-memory [`MemoryDom`] are interchangeable.

mod memory;

pub use memory::{ElementState, MemoryDom, ScrollPosition};

pub trait DomUtility {
    /// Replace the contents of the element with the given id.
    fn set_inner_html(&mut self, id: &str, html: &str);

    fn set_display(&mut self, id: &str, visible: bool);

    fn set_attribute(&mut self, id: &str, name: &str, value: &str);

    fn element_exists(&self, id: &str) -> bool;

    fn scroll_to_top(&mut self);

    fn scroll_to_element(&mut self, id: &str);

    /// Make every anchor on the page open in a new browsing context.
    fn open_links_in_new_context(&mut self);

    /// Run the code prettifier over the whole page.
    fn pretty_print(&mut self);
}
