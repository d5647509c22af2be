//! Mapping between [`Settings`] and the sections/keys of the settings file.
//!
//! Reading never fails: a missing key, a malformed scalar or an unknown enum
//! token all leave the field at its default.  Malformed values are logged at
//! debug level so a broken file can still be diagnosed.

use std::str::FromStr;

use filer_settings_core::codec::scalar::{format_bool, parse_bool, parse_int};
use filer_settings_core::{Color, FontSpec, KeyFile, Token};
use tracing::debug;

use super::settings::{
    BehaviorSettings, DesktopSettings, FolderViewSettings, Settings, SystemSettings,
    ThumbnailSettings, VolumeSettings, WindowSettings, DEFAULT_FALLBACK_ICON_THEME,
};

/// Section names.
pub mod section {
    pub const SYSTEM: &str = "System";
    pub const BEHAVIOR: &str = "Behavior";
    pub const DESKTOP: &str = "Desktop";
    pub const VOLUME: &str = "Volume";
    pub const THUMBNAIL: &str = "Thumbnail";
    pub const FOLDER_VIEW: &str = "FolderView";
    pub const WINDOW: &str = "Window";
}

/// Key names, grouped by section.
pub mod key {
    pub mod system {
        pub const FALLBACK_ICON_THEME_NAME: &str = "FallbackIconThemeName";
        pub const SU_COMMAND: &str = "SuCommand";
        pub const TERMINAL: &str = "Terminal";
        pub const ARCHIVER: &str = "Archiver";
        pub const SI_UNIT: &str = "SIUnit";
        pub const ONLY_USER_TEMPLATES: &str = "OnlyUserTemplates";
        pub const TEMPLATE_TYPE_ONCE: &str = "TemplateTypeOnce";
        /// Misspelt name written by old releases; still honoured on read.
        pub const LEGACY_TEMPLATE_TYPE_ONCE: &str = "OemplateTypeOnce";
        pub const TEMPLATE_RUN_APP: &str = "TemplateRunApp";
    }

    pub mod behavior {
        pub const BOOKMARK_OPEN_METHOD: &str = "BookmarkOpenMethod";
        pub const SINGLE_CLICK: &str = "SingleClick";
        pub const SPATIAL_MODE: &str = "SpatialMode";
        pub const DIR_INFO_WRITE: &str = "DirInfoWrite";
        pub const AUTO_SELECTION_DELAY: &str = "AutoSelectionDelay";
        pub const CONFIRM_DELETE: &str = "ConfirmDelete";
        pub const NO_USB_TRASH: &str = "NoUsbTrash";
        pub const CONFIRM_TRASH: &str = "ConfirmTrash";
        pub const QUICK_EXEC: &str = "QuickExec";
    }

    pub mod desktop {
        pub const WALLPAPER_MODE: &str = "WallpaperMode";
        pub const WALLPAPER: &str = "Wallpaper";
        pub const BG_COLOR: &str = "BgColor";
        pub const FG_COLOR: &str = "FgColor";
        pub const SHADOW_COLOR: &str = "ShadowColor";
        pub const FONT: &str = "Font";
        pub const SHOW_HIDDEN: &str = "ShowHidden";
        pub const SORT_ORDER: &str = "SortOrder";
        pub const SORT_COLUMN: &str = "SortColumn";
    }

    pub mod volume {
        pub const MOUNT_ON_STARTUP: &str = "MountOnStartup";
        pub const MOUNT_REMOVABLE: &str = "MountRemovable";
        pub const AUTO_RUN: &str = "AutoRun";
        pub const CLOSE_ON_UNMOUNT: &str = "CloseOnUnmount";
    }

    pub mod thumbnail {
        pub const SHOW_THUMBNAILS: &str = "ShowThumbnails";
        pub const MAX_THUMBNAIL_FILE_SIZE: &str = "MaxThumbnailFileSize";
        pub const THUMBNAIL_LOCAL_FILES_ONLY: &str = "ThumbnailLocalFilesOnly";
    }

    pub mod folder_view {
        pub const MODE: &str = "Mode";
        pub const SHOW_HIDDEN: &str = "ShowHidden";
        pub const SORT_ORDER: &str = "SortOrder";
        pub const SORT_COLUMN: &str = "SortColumn";
        pub const SORT_FOLDER_FIRST: &str = "SortFolderFirst";
        pub const SHOW_FILTER: &str = "ShowFilter";
        pub const BACKUP_AS_HIDDEN: &str = "BackupAsHidden";
        pub const SHOW_FULL_NAMES: &str = "ShowFullNames";
        pub const SHADOW_HIDDEN: &str = "ShadowHidden";
        pub const BIG_ICON_SIZE: &str = "BigIconSize";
        pub const SMALL_ICON_SIZE: &str = "SmallIconSize";
        pub const SIDE_PANE_ICON_SIZE: &str = "SidePaneIconSize";
        pub const THUMBNAIL_ICON_SIZE: &str = "ThumbnailIconSize";
    }

    pub mod window {
        pub const FIXED_WIDTH: &str = "FixedWidth";
        pub const FIXED_HEIGHT: &str = "FixedHeight";
        pub const LAST_WINDOW_WIDTH: &str = "LastWindowWidth";
        pub const LAST_WINDOW_HEIGHT: &str = "LastWindowHeight";
        pub const LAST_WINDOW_MAXIMIZED: &str = "LastWindowMaximized";
        pub const REMEMBER_WINDOW_SIZE: &str = "RememberWindowSize";
        pub const ALWAYS_SHOW_TABS: &str = "AlwaysShowTabs";
        pub const SHOW_TAB_CLOSE: &str = "ShowTabClose";
        pub const SPLITTER_POS: &str = "SplitterPos";
        pub const SIDE_PANE_MODE: &str = "SidePaneMode";
    }
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Typed lookups within one section, each falling back to a default.
struct SectionReader<'a> {
    file: &'a KeyFile,
    section: &'static str,
}

impl<'a> SectionReader<'a> {
    fn new(file: &'a KeyFile, section: &'static str) -> Self {
        Self { file, section }
    }

    fn raw(&self, key: &str) -> Option<&'a str> {
        self.file.get(self.section, key)
    }

    fn malformed(&self, key: &str, text: &str, expected: &str) {
        debug!(
            "[{}] {key}={text:?} is not a valid {expected}; using default",
            self.section
        );
    }

    fn bool(&self, key: &str, default: bool) -> bool {
        let Some(text) = self.raw(key) else {
            return default;
        };
        parse_bool(text).unwrap_or_else(|| {
            self.malformed(key, text, "boolean");
            default
        })
    }

    /// Negative values saturate to 0 and oversized ones to `u32::MAX`;
    /// range checks beyond that are left to `Settings::validate`.
    fn uint(&self, key: &str, default: u32) -> u32 {
        let Some(text) = self.raw(key) else {
            return default;
        };
        match parse_int(text) {
            Some(n) => u32::try_from(n.max(0)).unwrap_or(u32::MAX),
            None => {
                self.malformed(key, text, "integer");
                default
            }
        }
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.raw(key).unwrap_or(default).to_string()
    }

    fn token<T: Token>(&self, key: &str) -> T {
        let Some(text) = self.raw(key) else {
            return T::DEFAULT;
        };
        T::parse_token(text).unwrap_or_else(|| {
            self.malformed(key, text, T::KIND);
            T::DEFAULT
        })
    }

    fn parsed<T: FromStr>(&self, key: &str, default: T, expected: &str) -> T {
        let Some(text) = self.raw(key) else {
            return default;
        };
        text.parse().unwrap_or_else(|_| {
            self.malformed(key, text, expected);
            default
        })
    }

    fn color(&self, key: &str, default: Color) -> Color {
        self.parsed(key, default, "color")
    }

    fn font(&self, key: &str, default: &FontSpec) -> FontSpec {
        self.parsed(key, default.clone(), "font")
    }
}

/// Builds a [`Settings`] record from a parsed settings file.
///
/// `default_font` is the desktop font used when the file has none.
pub fn read_settings(file: &KeyFile, default_font: &FontSpec) -> Settings {
    Settings {
        system: read_system(&SectionReader::new(file, section::SYSTEM)),
        behavior: read_behavior(&SectionReader::new(file, section::BEHAVIOR)),
        desktop: read_desktop(&SectionReader::new(file, section::DESKTOP), default_font),
        volume: read_volume(&SectionReader::new(file, section::VOLUME)),
        thumbnail: read_thumbnail(&SectionReader::new(file, section::THUMBNAIL)),
        folder_view: read_folder_view(&SectionReader::new(file, section::FOLDER_VIEW)),
        window: read_window(&SectionReader::new(file, section::WINDOW)),
    }
}

fn read_system(r: &SectionReader<'_>) -> SystemSettings {
    use key::system::*;
    let d = SystemSettings::default();

    let mut fallback_icon_theme_name = r.string(FALLBACK_ICON_THEME_NAME, &d.fallback_icon_theme_name);
    if fallback_icon_theme_name.trim().is_empty() {
        fallback_icon_theme_name = DEFAULT_FALLBACK_ICON_THEME.to_string();
    }

    let template_type_once_key = if r.raw(TEMPLATE_TYPE_ONCE).is_some() {
        TEMPLATE_TYPE_ONCE
    } else {
        LEGACY_TEMPLATE_TYPE_ONCE
    };

    SystemSettings {
        fallback_icon_theme_name,
        su_command: r.string(SU_COMMAND, &d.su_command),
        terminal: r.string(TERMINAL, &d.terminal),
        archiver: r.string(ARCHIVER, &d.archiver),
        si_unit: r.bool(SI_UNIT, d.si_unit),
        only_user_templates: r.bool(ONLY_USER_TEMPLATES, d.only_user_templates),
        template_type_once: r.bool(template_type_once_key, d.template_type_once),
        template_run_app: r.bool(TEMPLATE_RUN_APP, d.template_run_app),
    }
}

fn read_behavior(r: &SectionReader<'_>) -> BehaviorSettings {
    use key::behavior::*;
    let d = BehaviorSettings::default();
    BehaviorSettings {
        bookmark_open_method: r.token(BOOKMARK_OPEN_METHOD),
        single_click: r.bool(SINGLE_CLICK, d.single_click),
        spatial_mode: r.bool(SPATIAL_MODE, d.spatial_mode),
        dir_info_write: r.bool(DIR_INFO_WRITE, d.dir_info_write),
        auto_selection_delay: r.uint(AUTO_SELECTION_DELAY, d.auto_selection_delay),
        confirm_delete: r.bool(CONFIRM_DELETE, d.confirm_delete),
        no_usb_trash: r.bool(NO_USB_TRASH, d.no_usb_trash),
        confirm_trash: r.bool(CONFIRM_TRASH, d.confirm_trash),
        quick_exec: r.bool(QUICK_EXEC, d.quick_exec),
    }
}

fn read_desktop(r: &SectionReader<'_>, default_font: &FontSpec) -> DesktopSettings {
    use key::desktop::*;
    let d = DesktopSettings::default();
    DesktopSettings {
        wallpaper_mode: r.token(WALLPAPER_MODE),
        wallpaper: r.string(WALLPAPER, &d.wallpaper),
        bg_color: r.color(BG_COLOR, d.bg_color),
        fg_color: r.color(FG_COLOR, d.fg_color),
        shadow_color: r.color(SHADOW_COLOR, d.shadow_color),
        font: r.font(FONT, default_font),
        show_hidden: r.bool(SHOW_HIDDEN, d.show_hidden),
        sort_order: r.token(SORT_ORDER),
        sort_column: r.token(SORT_COLUMN),
    }
}

fn read_volume(r: &SectionReader<'_>) -> VolumeSettings {
    use key::volume::*;
    let d = VolumeSettings::default();
    VolumeSettings {
        mount_on_startup: r.bool(MOUNT_ON_STARTUP, d.mount_on_startup),
        mount_removable: r.bool(MOUNT_REMOVABLE, d.mount_removable),
        auto_run: r.bool(AUTO_RUN, d.auto_run),
        close_on_unmount: r.bool(CLOSE_ON_UNMOUNT, d.close_on_unmount),
    }
}

fn read_thumbnail(r: &SectionReader<'_>) -> ThumbnailSettings {
    use key::thumbnail::*;
    let d = ThumbnailSettings::default();
    ThumbnailSettings {
        show_thumbnails: r.bool(SHOW_THUMBNAILS, d.show_thumbnails),
        max_thumbnail_file_size: r.uint(MAX_THUMBNAIL_FILE_SIZE, d.max_thumbnail_file_size),
        thumbnail_local_files_only: r.bool(THUMBNAIL_LOCAL_FILES_ONLY, d.thumbnail_local_files_only),
    }
}

fn read_folder_view(r: &SectionReader<'_>) -> FolderViewSettings {
    use key::folder_view::*;
    let d = FolderViewSettings::default();
    FolderViewSettings {
        view_mode: r.token(MODE),
        show_hidden: r.bool(SHOW_HIDDEN, d.show_hidden),
        sort_order: r.token(SORT_ORDER),
        sort_column: r.token(SORT_COLUMN),
        sort_folder_first: r.bool(SORT_FOLDER_FIRST, d.sort_folder_first),
        show_filter: r.bool(SHOW_FILTER, d.show_filter),
        backup_as_hidden: r.bool(BACKUP_AS_HIDDEN, d.backup_as_hidden),
        show_full_names: r.bool(SHOW_FULL_NAMES, d.show_full_names),
        shadow_hidden: r.bool(SHADOW_HIDDEN, d.shadow_hidden),
        big_icon_size: r.uint(BIG_ICON_SIZE, d.big_icon_size),
        small_icon_size: r.uint(SMALL_ICON_SIZE, d.small_icon_size),
        side_pane_icon_size: r.uint(SIDE_PANE_ICON_SIZE, d.side_pane_icon_size),
        thumbnail_icon_size: r.uint(THUMBNAIL_ICON_SIZE, d.thumbnail_icon_size),
    }
}

fn read_window(r: &SectionReader<'_>) -> WindowSettings {
    use key::window::*;
    let d = WindowSettings::default();
    WindowSettings {
        fixed_width: r.uint(FIXED_WIDTH, d.fixed_width),
        fixed_height: r.uint(FIXED_HEIGHT, d.fixed_height),
        last_width: r.uint(LAST_WINDOW_WIDTH, d.last_width),
        last_height: r.uint(LAST_WINDOW_HEIGHT, d.last_height),
        last_maximized: r.bool(LAST_WINDOW_MAXIMIZED, d.last_maximized),
        remember_size: r.bool(REMEMBER_WINDOW_SIZE, d.remember_size),
        always_show_tabs: r.bool(ALWAYS_SHOW_TABS, d.always_show_tabs),
        show_tab_close: r.bool(SHOW_TAB_CLOSE, d.show_tab_close),
        splitter_pos: r.uint(SPLITTER_POS, d.splitter_pos),
        side_pane_mode: r.token(SIDE_PANE_MODE),
    }
}

// ── Writing ───────────────────────────────────────────────────────────────────

struct SectionWriter<'a> {
    file: &'a mut KeyFile,
    section: &'static str,
}

impl<'a> SectionWriter<'a> {
    fn new(file: &'a mut KeyFile, section: &'static str) -> Self {
        Self { file, section }
    }

    fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.file.set(self.section, key, value);
        self
    }

    fn bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.string(key, format_bool(value))
    }

    fn uint(&mut self, key: &str, value: u32) -> &mut Self {
        self.file.set(self.section, key, value.to_string());
        self
    }

    fn token<T: Token>(&mut self, key: &str, value: T) -> &mut Self {
        self.string(key, value.as_token())
    }

    fn color(&mut self, key: &str, value: Color) -> &mut Self {
        self.file.set(self.section, key, value.name());
        self
    }

    fn font(&mut self, key: &str, value: &FontSpec) -> &mut Self {
        self.file.set(self.section, key, value.to_string());
        self
    }
}

/// Writes every field of `settings` into `file`.
///
/// Keys already present are updated in place; keys this schema does not know
/// are left untouched.
pub fn write_settings(settings: &Settings, file: &mut KeyFile) {
    {
        use key::system::*;
        let s = &settings.system;
        SectionWriter::new(file, section::SYSTEM)
            .string(FALLBACK_ICON_THEME_NAME, &s.fallback_icon_theme_name)
            .string(SU_COMMAND, &s.su_command)
            .string(TERMINAL, &s.terminal)
            .string(ARCHIVER, &s.archiver)
            .bool(SI_UNIT, s.si_unit)
            .bool(ONLY_USER_TEMPLATES, s.only_user_templates)
            .bool(TEMPLATE_TYPE_ONCE, s.template_type_once)
            .bool(TEMPLATE_RUN_APP, s.template_run_app);
    }
    {
        use key::behavior::*;
        let s = &settings.behavior;
        SectionWriter::new(file, section::BEHAVIOR)
            .token(BOOKMARK_OPEN_METHOD, s.bookmark_open_method)
            .bool(SINGLE_CLICK, s.single_click)
            .bool(SPATIAL_MODE, s.spatial_mode)
            .bool(DIR_INFO_WRITE, s.dir_info_write)
            .uint(AUTO_SELECTION_DELAY, s.auto_selection_delay)
            .bool(CONFIRM_DELETE, s.confirm_delete)
            .bool(NO_USB_TRASH, s.no_usb_trash)
            .bool(CONFIRM_TRASH, s.confirm_trash)
            .bool(QUICK_EXEC, s.quick_exec);
    }
    {
        use key::desktop::*;
        let s = &settings.desktop;
        SectionWriter::new(file, section::DESKTOP)
            .token(WALLPAPER_MODE, s.wallpaper_mode)
            .string(WALLPAPER, &s.wallpaper)
            .color(BG_COLOR, s.bg_color)
            .color(FG_COLOR, s.fg_color)
            .color(SHADOW_COLOR, s.shadow_color)
            .font(FONT, &s.font)
            .bool(SHOW_HIDDEN, s.show_hidden)
            .token(SORT_ORDER, s.sort_order)
            .token(SORT_COLUMN, s.sort_column);
    }
    {
        use key::volume::*;
        let s = &settings.volume;
        SectionWriter::new(file, section::VOLUME)
            .bool(MOUNT_ON_STARTUP, s.mount_on_startup)
            .bool(MOUNT_REMOVABLE, s.mount_removable)
            .bool(AUTO_RUN, s.auto_run)
            .bool(CLOSE_ON_UNMOUNT, s.close_on_unmount);
    }
    {
        use key::thumbnail::*;
        let s = &settings.thumbnail;
        SectionWriter::new(file, section::THUMBNAIL)
            .bool(SHOW_THUMBNAILS, s.show_thumbnails)
            .uint(MAX_THUMBNAIL_FILE_SIZE, s.max_thumbnail_file_size)
            .bool(THUMBNAIL_LOCAL_FILES_ONLY, s.thumbnail_local_files_only);
    }
    {
        use key::folder_view::*;
        let s = &settings.folder_view;
        SectionWriter::new(file, section::FOLDER_VIEW)
            .token(MODE, s.view_mode)
            .bool(SHOW_HIDDEN, s.show_hidden)
            .token(SORT_ORDER, s.sort_order)
            .token(SORT_COLUMN, s.sort_column)
            .bool(SORT_FOLDER_FIRST, s.sort_folder_first)
            .bool(SHOW_FILTER, s.show_filter)
            .bool(BACKUP_AS_HIDDEN, s.backup_as_hidden)
            .bool(SHOW_FULL_NAMES, s.show_full_names)
            .bool(SHADOW_HIDDEN, s.shadow_hidden)
            .uint(BIG_ICON_SIZE, s.big_icon_size)
            .uint(SMALL_ICON_SIZE, s.small_icon_size)
            .uint(SIDE_PANE_ICON_SIZE, s.side_pane_icon_size)
            .uint(THUMBNAIL_ICON_SIZE, s.thumbnail_icon_size);
    }
    {
        use key::window::*;
        let s = &settings.window;
        SectionWriter::new(file, section::WINDOW)
            .uint(FIXED_WIDTH, s.fixed_width)
            .uint(FIXED_HEIGHT, s.fixed_height)
            .uint(LAST_WINDOW_WIDTH, s.last_width)
            .uint(LAST_WINDOW_HEIGHT, s.last_height)
            .bool(LAST_WINDOW_MAXIMIZED, s.last_maximized)
            .bool(REMEMBER_WINDOW_SIZE, s.remember_size)
            .bool(ALWAYS_SHOW_TABS, s.always_show_tabs)
            .bool(SHOW_TAB_CLOSE, s.show_tab_close)
            .uint(SPLITTER_POS, s.splitter_pos)
            .token(SIDE_PANE_MODE, s.side_pane_mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filer_settings_core::{OpenTarget, SidePaneMode, SortColumn, SortOrder, ViewMode, WallpaperMode};

    fn read(text: &str) -> Settings {
        read_settings(&KeyFile::parse(text), &FontSpec::default())
    }

    #[test]
    fn test_empty_file_reads_as_defaults() {
        assert_eq!(read(""), Settings::default());
    }

    #[test]
    fn test_missing_desktop_font_uses_given_default() {
        let font = FontSpec::new("Noto Sans", 9.0);

        let s = read_settings(&KeyFile::new(), &font);

        assert_eq!(s.desktop.font, font);
    }

    #[test]
    fn test_reads_tokens_and_scalars() {
        // Arrange
        let text = "[Behavior]\n\
                    BookmarkOpenMethod=new_window\n\
                    SingleClick=true\n\
                    AutoSelectionDelay=250\n\
                    [Desktop]\n\
                    WallpaperMode=tile\n\
                    BgColor=#102030\n\
                    SortOrder=descending\n\
                    SortColumn=mtime\n\
                    [Window]\n\
                    SidePaneMode=dirtree\n";

        // Act
        let s = read(text);

        // Assert
        assert_eq!(s.behavior.bookmark_open_method, OpenTarget::NewWindow);
        assert!(s.behavior.single_click());
        assert_eq!(s.behavior.auto_selection_delay, 250);
        assert_eq!(s.desktop.wallpaper_mode, WallpaperMode::Tile);
        assert_eq!(s.desktop.bg_color, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(s.desktop.sort_order, SortOrder::Descending);
        assert_eq!(s.desktop.sort_column, SortColumn::MTime);
        assert_eq!(s.window.side_pane_mode, SidePaneMode::DirTree);
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let text = "[FolderView]\n\
                    Mode=gallery\n\
                    ShowHidden=perhaps\n\
                    BigIconSize=huge\n\
                    [Desktop]\n\
                    FgColor=not-a-color\n\
                    Font=,12\n";

        let s = read(text);

        assert_eq!(s.folder_view.view_mode, ViewMode::Icon);
        assert!(!s.folder_view.show_hidden);
        assert_eq!(s.folder_view.big_icon_size, 36);
        assert_eq!(s.desktop.fg_color, Color::WHITE);
        assert_eq!(s.desktop.font, FontSpec::default());
    }

    #[test]
    fn test_negative_sizes_saturate_to_zero() {
        let s = read("[Window]\nSplitterPos=-20\n");

        assert_eq!(s.window.splitter_pos, 0);
    }

    #[test]
    fn test_empty_fallback_theme_uses_builtin_name() {
        let s = read("[System]\nFallbackIconThemeName=\n");

        assert_eq!(s.system.fallback_icon_theme_name, DEFAULT_FALLBACK_ICON_THEME);
    }

    #[test]
    fn test_legacy_template_key_is_read() {
        let s = read("[System]\nOemplateTypeOnce=true\n");

        assert!(s.system.template_type_once());
    }

    #[test]
    fn test_current_template_key_wins_over_legacy() {
        let s = read("[System]\nOemplateTypeOnce=true\nTemplateTypeOnce=false\n");

        assert!(!s.system.template_type_once());
    }

    #[test]
    fn test_write_uses_current_template_key() {
        let mut settings = Settings::default();
        settings.system.template_type_once = true;
        let mut file = KeyFile::new();

        write_settings(&settings, &mut file);

        assert_eq!(file.get(section::SYSTEM, key::system::TEMPLATE_TYPE_ONCE), Some("true"));
        assert!(!file.contains(section::SYSTEM, key::system::LEGACY_TEMPLATE_TYPE_ONCE));
    }

    #[test]
    fn test_write_then_read_preserves_every_field() {
        // Arrange
        let mut settings = Settings::new(FontSpec::new("DejaVu Sans", 12.5));
        settings.system.terminal = "urxvt -e".to_string();
        settings.system.su_command = "pkexec %s".to_string();
        settings.behavior.no_usb_trash = true;
        settings.desktop.wallpaper = "/usr/share/backgrounds/a, b.png".to_string();
        settings.desktop.wallpaper_mode = WallpaperMode::Fit;
        settings.folder_view.view_mode = ViewMode::Detailed;
        settings.folder_view.sort_column = SortColumn::Owner;
        settings.thumbnail.max_thumbnail_file_size = 8192;
        settings.window.last_maximized = true;

        // Act
        let mut file = KeyFile::new();
        write_settings(&settings, &mut file);
        let reparsed = KeyFile::parse(&file.to_string());
        let restored = read_settings(&reparsed, &FontSpec::default());

        // Assert
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_write_keeps_unknown_keys() {
        let mut file = KeyFile::parse("[Window]\nCustomKey=42\n[Plugins]\nEnabled=foo\n");

        write_settings(&Settings::default(), &mut file);

        assert_eq!(file.get(section::WINDOW, "CustomKey"), Some("42"));
        assert_eq!(file.get("Plugins", "Enabled"), Some("foo"));
    }
}
