//! The page elements the game talks to.

use tube_memory::score::Score;
use tube_memory::validate::FieldStyle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement};

/// Id of the station name input.
pub const INPUT_ID: &str = "text_a";

/// Selector of the score element.
pub const SCORE_SELECTOR: &str = ".score";

/// CSS declarations for a field style. `None` clears the declaration.
pub fn style_declarations(style: FieldStyle) -> [(&'static str, Option<&'static str>); 2] {
    [
        ("border-color", style.border_color()),
        ("box-shadow", style.box_shadow()),
    ]
}

/// The input field and the score element.
#[derive(Debug, Clone)]
pub struct Page {
    pub input: HtmlInputElement,
    pub score: Option<Element>,
}

impl Page {
    /// Find the elements in the current document.
    pub fn find() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let input = document
            .get_element_by_id(INPUT_ID)
            .ok_or_else(|| JsValue::from_str("station input #text_a not found"))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("#text_a is not an input"))?;
        let score = document.query_selector(SCORE_SELECTOR)?;

        Ok(Self { input, score })
    }

    pub fn set_score(&self, score: Score) {
        if let Some(element) = &self.score {
            element.set_text_content(Some(&score.to_string()));
        }
    }

    pub fn set_style(&self, style: FieldStyle) {
        let css = self.input.style();
        for (property, value) in style_declarations(style) {
            let result = match value {
                Some(value) => css.set_property(property, value),
                None => css.remove_property(property).map(|_| ()),
            };
            if let Err(e) = result {
                tracing::debug!(property, error = ?e, "could not style input");
            }
        }
    }

    /// Replace the field's text, putting the caret at `caret` (UTF-16 units).
    pub fn set_value(&self, value: &str, caret: Option<usize>) {
        if self.input.value() != value {
            self.input.set_value(value);
        }
        if let Some(caret) = caret {
            let caret = u32::try_from(caret).unwrap_or(u32::MAX);
            let _ = self.input.set_selection_range(caret, caret);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_clears_both() {
        assert_eq!(
            style_declarations(FieldStyle::Neutral),
            [("border-color", None), ("box-shadow", None)]
        );
    }

    #[test]
    fn failure_is_red() {
        assert_eq!(
            style_declarations(FieldStyle::Failure),
            [
                ("border-color", Some("#E32017")),
                ("box-shadow", Some("0 0 0 2px #E32017")),
            ]
        );
    }
}
