//! Criterion benchmarks for the key-file codec.
//!
//! Settings are loaded once at startup and saved on every preference change,
//! so parse and serialize must stay well under a millisecond for a typical
//! profile.
//!
//! Run with:
//! ```bash
//! cargo bench --package filer-settings-core --bench keyfile_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filer_settings_core::{SortColumn, Token, ViewMode};
use filer_settings_core::KeyFile;

// ── Fixtures ──────────────────────────────────────────────────────────────────

const TYPICAL_PROFILE: &str = r#"[System]
FallbackIconThemeName=elementary
SuCommand=gksu %s
Terminal=xterm
Archiver=file-roller
SIUnit=false

[Behavior]
BookmarkOpenMethod=current_tab
SingleClick=false
AutoSelectionDelay=600
ConfirmDelete=true

[Desktop]
WallpaperMode=stretch
Wallpaper=/usr/share/backgrounds/default.png
BgColor=#4e7fb4
Font="Sans,10,-1,5,50,0,0,0,0,0"

[FolderView]
Mode=detailed
SortOrder=descending
SortColumn=mtime
BigIconSize=36

[Window]
FixedWidth=640
FixedHeight=480
SidePaneMode=places
"#;

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    c.bench_function("keyfile_parse_typical_profile", |b| {
        b.iter(|| KeyFile::parse(black_box(TYPICAL_PROFILE)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let file = KeyFile::parse(TYPICAL_PROFILE);
    c.bench_function("keyfile_serialize_typical_profile", |b| {
        b.iter(|| black_box(&file).to_string())
    });
}

fn bench_token_decode(c: &mut Criterion) {
    c.bench_function("token_decode_hit_and_miss", |b| {
        b.iter(|| {
            (
                ViewMode::from_token(black_box("thumbnail")),
                SortColumn::from_token(black_box("bogus")),
            )
        })
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_token_decode);
criterion_main!(benches);
