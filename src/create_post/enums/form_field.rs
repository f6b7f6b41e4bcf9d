/// The two user-editable form fields. The photo field is only ever written
/// by a successful generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Prompt,
}
