//! Scroll-triggered reveal animations.
//!
//! Each [`RevealSpec`] names a group of elements, the inline styles they get
//! up front, the styles applied once they intersect the viewport, and the
//! observer options. Elements are revealed once and then unobserved.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// An inline style declaration: `(property, value)`.
pub type StyleDecl = (&'static str, &'static str);

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub initial: &'static [StyleDecl],
    pub revealed: &'static [StyleDecl],
}

impl RevealSpec {
    /// Project cards slide up and fade in.
    #[must_use]
    pub fn project_cards() -> Self {
        Self {
            selector: ".project-card",
            threshold: 0.1,
            root_margin: Some("0px 0px -100px 0px"),
            initial: &[
                ("opacity", "0"),
                ("transform", "translateY(50px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
            revealed: &[("opacity", "1"), ("transform", "translateY(0)")],
        }
    }

    /// Skill bars keep their stylesheet look and only get full opacity.
    #[must_use]
    pub fn skill_bars() -> Self {
        Self {
            selector: ".skills-content .line",
            threshold: 0.5,
            root_margin: None,
            initial: &[],
            revealed: &[("opacity", "1")],
        }
    }

    /// Every reveal group on the page.
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![Self::project_cards(), Self::skill_bars()]
    }
}
