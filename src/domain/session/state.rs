use serde::{Deserialize, Serialize};

/// Built-in example passage, Kafka's "A Little Fable" in Spanish.
pub const EXAMPLE_TEXT: &str = "¡Ay! —dijo el ratón—. El mundo se hace cada día más pequeño. \
Al principio era tan grande que le tenía miedo. Corría y corría \
y me alegraba ver esos muros, a diestra y siniestra, en la distancia. \
Pero esas paredes se estrechan tan rápido que me encuentro en el último cuarto \
y ahí en el rincón está la trampa sobre la cual debo pasar. \
—Todo lo que debes hacer es cambiar de rumbo —dijo el gato… y se lo comió. \
Franz Kafka.";

/// Per-session form state for the text being converted.
///
/// Injected into the handlers that need it; never a process-wide variable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the current text with the given value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the current text with the built-in example passage.
    pub fn load_example(&mut self) {
        self.text = EXAMPLE_TEXT.to_string();
    }

    /// Reset the current text to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
