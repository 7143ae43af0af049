/// States of the character-driven tokenizer state machine.
///
/// Transitions are documented on the `handle_*_state` functions in
/// [`crate::tokens::states`] that implement them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    /// The default state, reading plain character data.
    ///
    /// # Example
    /// ```html
    /// Hello, World!
    /// ```
    Data,

    /// Just after a `<`.
    ///
    /// # Example
    /// ```html
    /// <tag>
    /// ```
    TagOpen,

    /// Just after `</`.
    ///
    /// # Example
    /// ```html
    /// </tag>
    /// ```
    EndTagOpen,

    /// Reading the characters of a start or end tag name.
    ///
    /// # Example
    /// ```html
    /// <tagName>
    /// ```
    TagName,

    /// Just after `<tag /`, expecting `>`.
    ///
    /// # Example
    /// ```html
    /// <tagName />
    /// ```
    SelfClosingStartTag,

    /// Between the tag name (or a previous attribute) and the next attribute name.
    BeforeAttributeName,

    /// Reading the characters of an attribute name.
    AttributeName,

    /// Just after an attribute name, before `=` or the next attribute.
    AfterAttributeName,

    /// After `=`, before the attribute value.
    BeforeAttributeValue,

    /// Inside a `"`-quoted attribute value.
    AttributeValueDoubleQuoted,

    /// Inside a `'`-quoted attribute value.
    AttributeValueSingleQuoted,

    /// Inside an unquoted attribute value.
    AttributeValueUnquoted,

    /// Just after a `"`/`'`-quoted attribute value.
    AfterAttributeValueQuoted,

    /// Just after an unquoted attribute value. Transitions identically to
    /// [`TokenizerState::AfterAttributeValueQuoted`].
    AfterAttributeValueUnquoted,

    /// Just after `<?`, up to the closing `>`.
    ///
    /// # Example
    /// ```html
    /// <?xml version="1.0"?>
    /// ```
    XmlDeclaration,

    /// Just after `<!`, up to the closing `>`.
    ///
    /// # Example
    /// ```html
    /// <!DOCTYPE html>
    /// ```
    DoctypeDeclaration,

    /// Inside `<script>`/`<style>` raw-text content, up to the matching end tag.
    RawText,
}

impl Default for TokenizerState {
    fn default() -> Self {
        TokenizerState::Data
    }
}
