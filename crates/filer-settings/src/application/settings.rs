//! The in-memory settings record.
//!
//! [`Settings`] groups fields the way the settings file groups keys: one
//! sub-struct per `[Section]`.  Every field has a default that applies on
//! first run and whenever its key is missing from the file.
//!
//! # Side-channel fields
//!
//! A few fields are mirrored into the desktop's shared configuration, so
//! writing them must be announced.  Those fields are private to this crate and
//! expose read-only getters here.  They change through the matching
//! `SettingsStore::set_*` method, which always publishes, or through the
//! guard returned by `SettingsStore::settings_mut`, which publishes whatever
//! differs when it is dropped.  All other fields are plain `pub` fields.

use filer_settings_core::{
    Color, FontSpec, OpenTarget, SidePaneMode, SortColumn, SortOrder, ViewMode, WallpaperMode,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::events::{SettingChange, SideChannelKey};

// ── Numeric bounds ────────────────────────────────────────────────────────────

/// Icon sizes in pixels.
pub const ICON_SIZE_RANGE: (u32, u32) = (8, 512);
/// Window width and height in pixels.
pub const WINDOW_DIMENSION_RANGE: (u32, u32) = (100, 16384);
/// Upper bound for the side-pane splitter position in pixels.
pub const MAX_SPLITTER_POS: u32 = 16384;
/// Upper bound for the hover auto-selection delay in milliseconds.
pub const MAX_AUTO_SELECTION_DELAY: u32 = 60_000;

/// Icon theme used when the desktop has none or only the generic one.
pub const DEFAULT_FALLBACK_ICON_THEME: &str = "elementary";

// ── Record ────────────────────────────────────────────────────────────────────

/// Every persisted preference of the file manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub system: SystemSettings,
    pub behavior: BehaviorSettings,
    pub desktop: DesktopSettings,
    pub volume: VolumeSettings,
    pub thumbnail: ThumbnailSettings,
    pub folder_view: FolderViewSettings,
    pub window: WindowSettings,
}

/// `[System]`: external programs and template handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub fallback_icon_theme_name: String,
    pub su_command: String,
    pub(crate) terminal: String,
    pub(crate) archiver: String,
    /// Show file sizes in SI units (kB = 1000 bytes).
    pub si_unit: bool,
    pub(crate) only_user_templates: bool,
    pub(crate) template_type_once: bool,
    pub(crate) template_run_app: bool,
}

impl SystemSettings {
    /// Command line of the terminal emulator.
    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// Command line of the archiver.
    pub fn archiver(&self) -> &str {
        &self.archiver
    }

    pub fn only_user_templates(&self) -> bool {
        self.only_user_templates
    }

    pub fn template_type_once(&self) -> bool {
        self.template_type_once
    }

    pub fn template_run_app(&self) -> bool {
        self.template_run_app
    }
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            fallback_icon_theme_name: DEFAULT_FALLBACK_ICON_THEME.to_string(),
            su_command: "gksu %s".to_string(),
            terminal: "xterm".to_string(),
            archiver: "file-roller".to_string(),
            si_unit: false,
            only_user_templates: false,
            template_type_once: false,
            template_run_app: false,
        }
    }
}

/// `[Behavior]`: how clicks, deletion and bookmarks behave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorSettings {
    pub bookmark_open_method: OpenTarget,
    pub(crate) single_click: bool,
    pub spatial_mode: bool,
    pub dir_info_write: bool,
    /// Hover delay before an item is selected in single-click mode, in ms.
    pub auto_selection_delay: u32,
    pub confirm_delete: bool,
    pub(crate) no_usb_trash: bool,
    pub confirm_trash: bool,
    pub(crate) quick_exec: bool,
}

impl BehaviorSettings {
    pub fn single_click(&self) -> bool {
        self.single_click
    }

    /// Delete files on removable media instead of moving them to the trash.
    pub fn no_usb_trash(&self) -> bool {
        self.no_usb_trash
    }

    /// Run executables without asking first.
    pub fn quick_exec(&self) -> bool {
        self.quick_exec
    }
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            bookmark_open_method: OpenTarget::CurrentTab,
            single_click: false,
            spatial_mode: false,
            dir_info_write: true,
            auto_selection_delay: 600,
            confirm_delete: true,
            no_usb_trash: false,
            confirm_trash: false,
            quick_exec: true,
        }
    }
}

/// `[Desktop]`: wallpaper, colors and icon ordering of the desktop window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSettings {
    pub wallpaper_mode: WallpaperMode,
    pub wallpaper: String,
    pub bg_color: Color,
    pub fg_color: Color,
    pub shadow_color: Color,
    pub font: FontSpec,
    pub show_hidden: bool,
    pub sort_order: SortOrder,
    pub sort_column: SortColumn,
}

impl DesktopSettings {
    fn with_font(font: FontSpec) -> Self {
        Self {
            wallpaper_mode: WallpaperMode::None,
            wallpaper: String::new(),
            bg_color: Color::rgb(0x4e, 0x7f, 0xb4),
            fg_color: Color::WHITE,
            shadow_color: Color::BLACK,
            font,
            show_hidden: false,
            sort_order: SortOrder::Ascending,
            sort_column: SortColumn::Name,
        }
    }
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self::with_font(FontSpec::default())
    }
}

/// `[Volume]`: removable media handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSettings {
    pub mount_on_startup: bool,
    pub mount_removable: bool,
    pub auto_run: bool,
    pub close_on_unmount: bool,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            mount_on_startup: true,
            mount_removable: true,
            auto_run: true,
            close_on_unmount: true,
        }
    }
}

/// `[Thumbnail]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSettings {
    pub show_thumbnails: bool,
    pub(crate) max_thumbnail_file_size: u32,
    pub(crate) thumbnail_local_files_only: bool,
}

impl ThumbnailSettings {
    /// Largest file, in KiB, for which a thumbnail is generated.
    pub fn max_thumbnail_file_size(&self) -> u32 {
        self.max_thumbnail_file_size
    }

    pub fn thumbnail_local_files_only(&self) -> bool {
        self.thumbnail_local_files_only
    }
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            show_thumbnails: true,
            max_thumbnail_file_size: 4096,
            thumbnail_local_files_only: true,
        }
    }
}

/// `[FolderView]`: defaults for newly opened folder views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderViewSettings {
    pub view_mode: ViewMode,
    pub show_hidden: bool,
    pub sort_order: SortOrder,
    pub sort_column: SortColumn,
    pub sort_folder_first: bool,
    pub show_filter: bool,
    pub(crate) backup_as_hidden: bool,
    pub show_full_names: bool,
    pub shadow_hidden: bool,
    pub big_icon_size: u32,
    pub small_icon_size: u32,
    pub side_pane_icon_size: u32,
    pub thumbnail_icon_size: u32,
}

impl FolderViewSettings {
    /// Treat backup files (`foo~`) as hidden.
    pub fn backup_as_hidden(&self) -> bool {
        self.backup_as_hidden
    }
}

impl Default for FolderViewSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Icon,
            show_hidden: false,
            sort_order: SortOrder::Ascending,
            sort_column: SortColumn::Name,
            sort_folder_first: true,
            show_filter: false,
            backup_as_hidden: false,
            show_full_names: false,
            shadow_hidden: false,
            big_icon_size: 36,
            small_icon_size: 16,
            side_pane_icon_size: 12,
            thumbnail_icon_size: 128,
        }
    }
}

/// `[Window]`: main window geometry and tab behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub fixed_width: u32,
    pub fixed_height: u32,
    pub last_width: u32,
    pub last_height: u32,
    pub last_maximized: bool,
    pub remember_size: bool,
    pub always_show_tabs: bool,
    pub show_tab_close: bool,
    pub splitter_pos: u32,
    pub side_pane_mode: SidePaneMode,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            fixed_width: 640,
            fixed_height: 480,
            last_width: 640,
            last_height: 480,
            last_maximized: false,
            remember_size: true,
            always_show_tabs: false,
            show_tab_close: true,
            splitter_pos: 150,
            side_pane_mode: SidePaneMode::Places,
        }
    }
}

impl Settings {
    /// Creates a record holding every default, with `default_font` as the
    /// desktop font.
    pub fn new(default_font: FontSpec) -> Self {
        Self {
            system: SystemSettings::default(),
            behavior: BehaviorSettings::default(),
            desktop: DesktopSettings::with_font(default_font),
            volume: VolumeSettings::default(),
            thumbnail: ThumbnailSettings::default(),
            folder_view: FolderViewSettings::default(),
            window: WindowSettings::default(),
        }
    }

    /// Clamps numeric fields into their valid ranges.
    ///
    /// Returns the number of fields that had to be changed; each one is
    /// logged at warn level.
    pub fn validate(&mut self) -> usize {
        let (icon_min, icon_max) = ICON_SIZE_RANGE;
        let (dim_min, dim_max) = WINDOW_DIMENSION_RANGE;
        let view = &mut self.folder_view;
        let window = &mut self.window;

        [
            clamp_field("BigIconSize", &mut view.big_icon_size, icon_min, icon_max),
            clamp_field("SmallIconSize", &mut view.small_icon_size, icon_min, icon_max),
            clamp_field("SidePaneIconSize", &mut view.side_pane_icon_size, icon_min, icon_max),
            clamp_field("ThumbnailIconSize", &mut view.thumbnail_icon_size, icon_min, icon_max),
            clamp_field("FixedWidth", &mut window.fixed_width, dim_min, dim_max),
            clamp_field("FixedHeight", &mut window.fixed_height, dim_min, dim_max),
            clamp_field("LastWindowWidth", &mut window.last_width, dim_min, dim_max),
            clamp_field("LastWindowHeight", &mut window.last_height, dim_min, dim_max),
            clamp_field("SplitterPos", &mut window.splitter_pos, 0, MAX_SPLITTER_POS),
            clamp_field(
                "AutoSelectionDelay",
                &mut self.behavior.auto_selection_delay,
                0,
                MAX_AUTO_SELECTION_DELAY,
            ),
        ]
        .into_iter()
        .filter(|clamped| *clamped)
        .count()
    }

    /// One change per side-channel field, carrying its current value.
    pub fn side_channel_changes(&self) -> Vec<SettingChange> {
        use SideChannelKey::*;
        vec![
            SettingChange::new(Terminal, self.system.terminal.as_str()),
            SettingChange::new(Archiver, self.system.archiver.as_str()),
            SettingChange::new(SingleClick, self.behavior.single_click),
            SettingChange::new(QuickExec, self.behavior.quick_exec),
            SettingChange::new(NoUsbTrash, self.behavior.no_usb_trash),
            SettingChange::new(BackupAsHidden, self.folder_view.backup_as_hidden),
            SettingChange::new(ThumbnailMaxSize, self.thumbnail.max_thumbnail_file_size),
            SettingChange::new(ThumbnailLocalOnly, self.thumbnail.thumbnail_local_files_only),
            SettingChange::new(OnlyUserTemplates, self.system.only_user_templates),
            SettingChange::new(TemplateTypeOnce, self.system.template_type_once),
            SettingChange::new(TemplateRunApp, self.system.template_run_app),
        ]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(FontSpec::default())
    }
}

fn clamp_field(key: &str, value: &mut u32, min: u32, max: u32) -> bool {
    let clamped = (*value).clamp(min, max);
    if clamped == *value {
        return false;
    }
    warn!("{key}={value} out of range {min}..={max}; clamped to {clamped}");
    *value = clamped;
    true
}
