/// The tree constructor's dispatch state.
///
/// Most transitions replace the top of the mode stack; `<title>` pushes
/// [`InsertionMode::Text`] and `<script>`/`<style>` push
/// [`InsertionMode::RawText`], each popped by its matching end tag back to
/// [`InsertionMode::InHead`]. Both disciplines coexist — see the builder's
/// `push_mode`/`replace_mode`/`pop_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionMode {
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    AfterHead,
    InBody,
    Text,
    RawText,
}
