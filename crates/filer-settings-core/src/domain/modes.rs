//! Enum-valued settings.
//!
//! Every enum here is declared through [`token_enum!`], which fixes the
//! numeric discriminant and the on-disk token of each variant in one place.
//! Tokens and defaults must never change: they are the file format.

use crate::codec::tokens::token_enum;

token_enum! {
    /// Where a bookmark opens when activated.
    pub enum OpenTarget: "bookmark open target" {
        /// Replace the folder shown in the current tab.
        CurrentTab = (0, "current_tab"),
        /// Open a new tab in the current window.
        NewTab = (1, "new_tab"),
        /// Open a new window.
        NewWindow = (2, "new_window"),
        /// Open a new tab in the most recently active window.
        LastWindow = (3, "last_window"),
    }
    default = CurrentTab;
}

token_enum! {
    /// How the desktop wallpaper image is drawn.
    pub enum WallpaperMode: "wallpaper mode" {
        /// Plain background color, no image.
        None = (0, "none"),
        /// Let the underlying root window show through.
        Transparent = (1, "transparent"),
        /// Scale to fill the screen, ignoring aspect ratio.
        Stretch = (2, "stretch"),
        /// Scale to fit inside the screen, keeping aspect ratio.
        Fit = (3, "fit"),
        /// Draw unscaled in the centre of the screen.
        Center = (4, "center"),
        /// Repeat unscaled across the screen.
        Tile = (5, "tile"),
    }
    default = None;
}

token_enum! {
    /// How a folder view lays out its items.
    pub enum ViewMode: "view mode" {
        Icon = (0, "icon"),
        Compact = (1, "compact"),
        Detailed = (2, "detailed"),
        Thumbnail = (3, "thumbnail"),
    }
    default = Icon;
}

token_enum! {
    /// What the side pane of a browser window shows.
    pub enum SidePaneMode: "side pane mode" {
        /// Bookmarks, devices and standard places.
        Places = (0, "places"),
        /// An expandable directory tree.
        DirTree = (1, "dirtree"),
        /// No side pane.
        None = (2, "none"),
    }
    default = Places;
}

token_enum! {
    /// Direction of a sort.
    pub enum SortOrder: "sort order" {
        Ascending = (0, "ascending"),
        Descending = (1, "descending"),
    }
    default = Ascending;
}

token_enum! {
    /// The file attribute a folder view is sorted by.
    pub enum SortColumn: "sort column" {
        Name = (0, "name"),
        Type = (1, "type"),
        Size = (2, "size"),
        /// Modification time.
        MTime = (3, "mtime"),
        Owner = (4, "owner"),
    }
    default = Name;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tokens::Token;
    use crate::codec::CodecError;

    #[test]
    fn test_open_target_tokens() {
        assert_eq!(OpenTarget::CurrentTab.as_token(), "current_tab");
        assert_eq!(OpenTarget::NewTab.as_token(), "new_tab");
        assert_eq!(OpenTarget::NewWindow.as_token(), "new_window");
        assert_eq!(OpenTarget::LastWindow.as_token(), "last_window");
    }

    #[test]
    fn test_side_pane_none_token_differs_from_variant_name_case() {
        assert_eq!(SidePaneMode::DirTree.as_token(), "dirtree");
        assert_eq!(SidePaneMode::from_token("none"), SidePaneMode::None);
        assert_eq!(SidePaneMode::from_token("dir_tree"), SidePaneMode::Places);
    }

    #[test]
    fn test_sort_column_bogus_decodes_to_name() {
        assert_eq!(SortColumn::from_token("bogus"), SortColumn::Name);
    }

    #[test]
    fn test_wallpaper_mode_from_discriminant() {
        assert_eq!(WallpaperMode::try_from(5), Ok(WallpaperMode::Tile));
        assert_eq!(u8::from(WallpaperMode::Fit), 3);
        assert_eq!(
            WallpaperMode::try_from(6),
            Err(CodecError::UnknownDiscriminant {
                kind: "wallpaper mode",
                value: 6
            })
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OpenTarget::default(), OpenTarget::CurrentTab);
        assert_eq!(WallpaperMode::default(), WallpaperMode::None);
        assert_eq!(ViewMode::default(), ViewMode::Icon);
        assert_eq!(SidePaneMode::default(), SidePaneMode::Places);
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortColumn::default(), SortColumn::Name);
    }

    #[test]
    fn test_all_lists_variants_in_declaration_order() {
        assert_eq!(
            ViewMode::ALL,
            &[
                ViewMode::Icon,
                ViewMode::Compact,
                ViewMode::Detailed,
                ViewMode::Thumbnail
            ]
        );
        assert_eq!(SortOrder::ALL.len(), 2);
        assert_eq!(SortColumn::ALL.len(), 5);
    }
}
