/// The in-memory aggregate of user-entered name, prompt, and the generated
/// image as a data URI. `photo` is either empty or a well-formed
/// `data:image/jpeg;base64,` URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub prompt: String,
    pub photo: String,
}
