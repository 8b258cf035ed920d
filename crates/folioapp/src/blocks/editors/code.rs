//! Code block editor: source text, language from a fixed list, theme and
//! line numbers, plus the highlighted/raw view toggle.

use crate::blocks::{BlockData, CodeBlock, CodeTheme};
use crate::error::{FolioError, Result};

pub const CODE_LANGUAGES: &[&str] = &[
    "typescript",
    "javascript",
    "python",
    "bash",
    "html",
    "css",
    "json",
    "sql",
    "go",
    "rust",
    "java",
    "cpp",
];

/// Which face of a code block the authoring surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeView {
    #[default]
    Highlighted,
    Raw,
}

#[derive(Debug, Clone)]
pub struct CodeEditor {
    data: CodeBlock,
    view: CodeView,
}

impl CodeEditor {
    pub fn new(data: CodeBlock) -> Self {
        Self {
            data,
            view: CodeView::Highlighted,
        }
    }

    pub fn data(&self) -> &CodeBlock {
        &self.data
    }

    pub fn view(&self) -> CodeView {
        self.view
    }

    pub fn set_code(&mut self, code: &str) -> BlockData {
        self.data.code = code.to_string();
        self.emit()
    }

    pub fn set_language(&mut self, language: &str) -> Result<BlockData> {
        if !CODE_LANGUAGES.contains(&language) {
            return Err(FolioError::invalid(format!(
                "unsupported language '{}', expected one of: {}",
                language,
                CODE_LANGUAGES.join(", ")
            )));
        }
        self.data.language = language.to_string();
        Ok(self.emit())
    }

    pub fn set_theme(&mut self, theme: CodeTheme) -> BlockData {
        self.data.theme = theme;
        self.emit()
    }

    pub fn toggle_theme(&mut self) -> BlockData {
        let next = match self.data.theme {
            CodeTheme::Dark => CodeTheme::Light,
            CodeTheme::Light => CodeTheme::Dark,
        };
        self.set_theme(next)
    }

    pub fn toggle_line_numbers(&mut self) -> BlockData {
        self.data.line_numbers = !self.data.line_numbers;
        self.emit()
    }

    /// Clicking the highlighted view switches to raw editing.
    pub fn click(&mut self) {
        self.view = CodeView::Raw;
    }

    /// Leaving the raw editor switches back to the highlighted view.
    pub fn blur(&mut self) {
        self.view = CodeView::Highlighted;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            CodeView::Highlighted => CodeView::Raw,
            CodeView::Raw => CodeView::Highlighted,
        };
    }

    pub fn sync(&mut self, data: CodeBlock) {
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Code(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_allow_list() {
        let mut editor = CodeEditor::new(CodeBlock::default());
        assert!(editor.set_language("rust").is_ok());
        assert!(editor.set_language("cobol").is_err());
        assert_eq!(editor.data().language, "rust");
    }

    #[test]
    fn test_click_and_blur_switch_views() {
        let mut editor = CodeEditor::new(CodeBlock::default());
        assert_eq!(editor.view(), CodeView::Highlighted);
        editor.click();
        assert_eq!(editor.view(), CodeView::Raw);
        editor.blur();
        assert_eq!(editor.view(), CodeView::Highlighted);
        editor.toggle_view();
        assert_eq!(editor.view(), CodeView::Raw);
    }

    #[test]
    fn test_toggles_keep_code() {
        let mut editor = CodeEditor::new(CodeBlock::default());
        editor.set_code("fn main() {}");
        editor.toggle_theme();
        let data = editor.toggle_line_numbers();
        match data {
            BlockData::Code(code) => {
                assert_eq!(code.code, "fn main() {}");
                assert_eq!(code.theme, CodeTheme::Dark);
                assert!(code.line_numbers);
                assert_eq!(code.language, "typescript");
            }
            other => panic!("expected code, got {:?}", other),
        }
    }
}
