//! Translation lookup injected into the resolvers.

pub mod catalog;

pub use catalog::Catalog;

/// Returns the display string for `text`, or `text` itself when no
/// translation exists.
pub trait Localizer {
    fn translate(&self, text: &str) -> String;
}

/// No translation at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Localizer for Identity {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<L: Localizer + ?Sized> Localizer for Box<L> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}
