use super::BlockKind;

/// One entry of the "add a block" picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: BlockKind,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const BLOCK_PALETTE: [PaletteEntry; 10] = [
    PaletteEntry { kind: BlockKind::Text, icon: "T", label: "Text", description: "Plain paragraph" },
    PaletteEntry { kind: BlockKind::Heading, icon: "H", label: "Heading", description: "H1, H2, or H3 title" },
    PaletteEntry { kind: BlockKind::Code, icon: "</>", label: "Code", description: "Syntax highlighted code" },
    PaletteEntry { kind: BlockKind::Callout, icon: "ℹ", label: "Callout", description: "Info, warning, success box" },
    PaletteEntry { kind: BlockKind::Image, icon: "⬜", label: "Image", description: "Image with caption" },
    PaletteEntry { kind: BlockKind::Table, icon: "⊞", label: "Table", description: "Editable grid" },
    PaletteEntry { kind: BlockKind::Divider, icon: "—", label: "Divider", description: "Horizontal separator" },
    PaletteEntry { kind: BlockKind::Button, icon: "⬡", label: "Button", description: "Linked button element" },
    PaletteEntry { kind: BlockKind::Badge, icon: "◉", label: "Badge", description: "Inline label badge" },
    PaletteEntry { kind: BlockKind::Quote, icon: "❝", label: "Quote", description: "Block quotation" },
];

pub fn palette_entry(kind: BlockKind) -> &'static PaletteEntry {
    // BLOCK_PALETTE lists every kind in BlockKind::ALL order.
    let index = BlockKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
    &BLOCK_PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_kind_once() {
        for (entry, kind) in BLOCK_PALETTE.iter().zip(BlockKind::ALL) {
            assert_eq!(entry.kind, kind);
        }
        assert_eq!(palette_entry(BlockKind::Quote).label, "Quote");
    }
}
