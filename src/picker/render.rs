use std::fmt::Display;

/// How one kind of item shows up in a listing, and which free-text answers
/// (besides ENTER, `?` and item numbers) the user may give while it is listed.
pub trait ItemRenderer<T: ?Sized> {
    fn render(&self, item: &T) -> String;

    /// Free text is only offered here after the built-in grammar has had its
    /// turn, so `response` is never empty, `?`, or a number.
    fn accepts(&self, _response: &str) -> bool {
        true
    }
}

/// Renders with `Display` and accepts any free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayRenderer;

impl<T: Display + ?Sized> ItemRenderer<T> for DisplayRenderer {
    fn render(&self, item: &T) -> String {
        item.to_string()
    }
}

/// Renderer built from a pair of closures, for one-off listings.
pub struct FnRenderer<F, A> {
    render: F,
    accepts: A,
}

impl<F> FnRenderer<F, fn(&str) -> bool> {
    pub fn new(render: F) -> Self {
        FnRenderer {
            render,
            accepts: |_| true,
        }
    }
}

impl<F, A> FnRenderer<F, A> {
    pub fn accepting<B>(self, accepts: B) -> FnRenderer<F, B>
    where
        B: Fn(&str) -> bool,
    {
        FnRenderer {
            render: self.render,
            accepts,
        }
    }
}

impl<T: ?Sized, F, A> ItemRenderer<T> for FnRenderer<F, A>
where
    F: Fn(&T) -> String,
    A: Fn(&str) -> bool,
{
    fn render(&self, item: &T) -> String {
        (self.render)(item)
    }

    fn accepts(&self, response: &str) -> bool {
        (self.accepts)(response)
    }
}

/// Absent items render as an empty line; present ones defer to the inner renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalRenderer<R>(pub R);

impl<T, R: ItemRenderer<T>> ItemRenderer<Option<T>> for OptionalRenderer<R> {
    fn render(&self, item: &Option<T>) -> String {
        item.as_ref().map(|v| self.0.render(v)).unwrap_or_default()
    }

    fn accepts(&self, response: &str) -> bool {
        self.0.accepts(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renderer_uses_to_string_and_accepts_everything() {
        assert_eq!(ItemRenderer::<i32>::render(&DisplayRenderer, &42), "42");
        assert!(ItemRenderer::<str>::accepts(&DisplayRenderer, "anything"));
    }

    #[test]
    fn fn_renderer_with_validator() {
        let renderer = FnRenderer::new(|s: &String| s.to_uppercase())
            .accepting(|r: &str| r.eq_ignore_ascii_case("q"));
        assert_eq!(renderer.render(&"abc".to_string()), "ABC");
        assert!(ItemRenderer::<String>::accepts(&renderer, "Q"));
        assert!(!ItemRenderer::<String>::accepts(&renderer, "x"));
    }

    #[test]
    fn absent_items_render_empty() {
        let renderer = OptionalRenderer(DisplayRenderer);
        assert_eq!(renderer.render(&Some("x")), "x");
        assert_eq!(renderer.render(&None::<&str>), "");
    }
}
