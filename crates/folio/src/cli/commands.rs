//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Chooses the data directory and the acting user
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Context Setup**: data dir, identity, config, logging and the API
//! 2. **Dispatch**: route each subcommand to its handler
//! 3. **Sessions**: block, markdown and navbar edits open the matching editing
//!    surface, apply one change and flush it before returning
//! 4. **Error Handling**: surface notices at error level become command errors

use super::render::{
    print_messages, render_blocks, render_navbar, render_outline, render_palette, render_prefs, render_projects,
};
use super::setup::{BlockCommands, Cli, Commands, HeaderCommands, NavCommands, PrefsCommands, ProjectCommands};
use anyhow::{bail, Context, Result};
use clap::Parser;
use folioapp::api::{CmdMessage, FolioApi, HeaderUpdate, MessageLevel, Notice, ProjectUpdate};
use folioapp::blocks::editors::BlockEditor;
use folioapp::blocks::{parse_sequence, BlockData, BlockKind, BlockWidth};
use folioapp::clock::{Clock, SystemClock};
use folioapp::config::{self, FolioConfig};
use folioapp::error::{self, FolioError};
use folioapp::model::{ContentKind, Header, NavbarKind, Project, UserId};
use folioapp::navbar::{NavbarEditor, StyleKey};
use folioapp::outline::{filter_by_title, HEADER_ICONS};
use folioapp::prefs::{ColorKey, DocsTheme, FileKv, PreferenceSession, PREFS_FILE};
use folioapp::session::StaticSession;
use folioapp::store::FileStore;
use folioapp::surface::{DocumentSurface, Format, MarkdownSurface, Selection, SurfaceEvent, SurfaceOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const IDENTITY_FILE: &str = "identity";
const MIN_BLOCK_PREFIX: usize = 4;

type Api = FolioApi<FileStore, StaticSession>;

struct AppContext {
    api: Api,
    config: FolioConfig,
    data_dir: PathBuf,
    user: UserId,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = create_context(&cli)?;

    match cli.command {
        Commands::Project { action } => handle_project(&mut ctx, action),
        Commands::Header { project, action } => handle_header(&mut ctx, &project, action),
        Commands::Block { project, header, action } => handle_block(&mut ctx, &project, &header, action),
        Commands::Nav { project, action } => handle_nav(&mut ctx, &project, action),
        Commands::Export { project, out } => handle_export(&ctx, &project, out),
        Commands::Prefs { action } => handle_prefs(&ctx, action),
        Commands::Whoami => {
            println!("{}", ctx.user);
            Ok(())
        }
    }
}

/// Logs go to stderr. `FOLIO_LOG` (then `RUST_LOG`) takes the usual `EnvFilter` syntax.
fn init_logging(verbose: bool) {
    let default = if verbose { "folio=debug,folioapp=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn create_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = config::data_dir(cli.data.as_deref()).context("pass --data to choose one")?;
    let user = resolve_user(cli.user.as_deref(), &data_dir)?;
    let config = FolioConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), user = %user, "context ready");

    Ok(AppContext {
        api: FolioApi::new(FileStore::new(data_dir.clone()), StaticSession::signed_in(user)),
        config,
        data_dir,
        user,
    })
}

/// The `--user` flag wins; otherwise the id kept in the data dir, created on first use.
fn resolve_user(flag: Option<&str>, data_dir: &Path) -> Result<UserId> {
    if let Some(raw) = flag {
        return Ok(UserId::from_str(raw)?);
    }
    let path = data_dir.join(IDENTITY_FILE);
    if path.exists() {
        let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        return Ok(UserId::from_str(&raw)?);
    }
    let user = UserId::new();
    fs::create_dir_all(data_dir)?;
    fs::write(&path, user.to_string()).with_context(|| format!("writing {}", path.display()))?;
    Ok(user)
}

// --- Projects ---

fn handle_project(ctx: &mut AppContext, action: ProjectCommands) -> Result<()> {
    let result = match action {
        ProjectCommands::New { name, description } => ctx.api.create_project(&name, &description)?,
        ProjectCommands::List => {
            let projects = ctx.api.list_projects()?.projects;
            print!("{}", render_projects(&projects));
            return Ok(());
        }
        ProjectCommands::Rename { project, name } => {
            let project = ctx.api.resolve_project(&project)?;
            ctx.api.update_project(project.id, ProjectUpdate::name(name))?
        }
        ProjectCommands::Rm { project } => {
            let project = ctx.api.resolve_project(&project)?;
            ctx.api.delete_project(project.id)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

// --- Headers ---

fn handle_header(ctx: &mut AppContext, project: &str, action: HeaderCommands) -> Result<()> {
    let project = ctx.api.resolve_project(project)?;

    let result = match action {
        HeaderCommands::Add { title, parent } => {
            let parent_id = match parent {
                Some(selector) => Some(ctx.api.resolve_header(project.id, &selector)?.id),
                None => None,
            };
            ctx.api.create_header(project.id, &title, parent_id)?
        }
        HeaderCommands::List { filter } => {
            let headers = ctx.api.list_headers(project.id)?.headers;
            let output = match filter {
                Some(query) => render_outline(&headers, Some(&filter_by_title(&headers, &query))),
                None => render_outline(&headers, None),
            };
            print!("{}", output);
            return Ok(());
        }
        HeaderCommands::Rm { header } => {
            let header = ctx.api.resolve_header(project.id, &header)?;
            ctx.api.delete_header(header.id)?
        }
        HeaderCommands::Rename { header, title } => {
            let header = ctx.api.resolve_header(project.id, &header)?;
            ctx.api.update_header(header.id, HeaderUpdate::title(title))?
        }
        HeaderCommands::Icon { header, icon, list } => {
            if list {
                println!("{}", HEADER_ICONS.join(" "));
                return Ok(());
            }
            let Some(icon) = icon else {
                bail!("give an icon, or --list to see suggestions");
            };
            let header = ctx.api.resolve_header(project.id, &header)?;
            ctx.api.update_header(header.id, HeaderUpdate::icon(icon))?
        }
        HeaderCommands::Move { header, over } => {
            let active = ctx.api.resolve_header(project.id, &header)?;
            let over = ctx.api.resolve_header(project.id, &over)?;
            ctx.api.move_header(project.id, active.id, over.id)?
        }
        HeaderCommands::Write { header, text } => {
            let header = markdown_header(ctx, &project, &header)?;
            let mut surface = MarkdownSurface::open(&header, SystemClock, SurfaceOptions::from(&ctx.config));
            surface.mount();
            surface.input(&text);
            surface.save_now(&mut ctx.api);
            finish_surface(surface.drain_events())?;
            return Ok(());
        }
        HeaderCommands::Format {
            header,
            format,
            start,
            end,
        } => {
            let format = Format::from_str(&format)?;
            let header = markdown_header(ctx, &project, &header)?;
            let mut surface = MarkdownSurface::open(&header, SystemClock, SurfaceOptions::from(&ctx.config));
            surface.mount();
            surface.apply_format(&format, Selection::new(start, end.unwrap_or(start)));
            surface.save_now(&mut ctx.api);
            finish_surface(surface.drain_events())?;
            println!("{}", surface.text());
            return Ok(());
        }
        HeaderCommands::Show { header } => {
            let header = ctx.api.resolve_header(project.id, &header)?;
            match header.content_kind() {
                ContentKind::Blocks => print!("{}", render_blocks(&parse_sequence(Some(&header.content)))),
                ContentKind::Markdown => println!("{}", header.content),
            }
            return Ok(());
        }
    };
    print_messages(&result.messages);
    Ok(())
}

/// A header whose content can be edited as markdown: markdown or still empty.
fn markdown_header(ctx: &AppContext, project: &Project, selector: &str) -> Result<Header> {
    let header = ctx.api.resolve_header(project.id, selector)?;
    if header.content_kind() == ContentKind::Blocks {
        bail!("\"{}\" holds blocks, edit it with `folio block`", header.title);
    }
    Ok(header)
}

// --- Blocks ---

fn handle_block(ctx: &mut AppContext, project: &str, header: &str, action: BlockCommands) -> Result<()> {
    let project = ctx.api.resolve_project(project)?;
    let header = ctx.api.resolve_header(project.id, header)?;

    // Markdown content opens as a single text block and is stored as blocks on the next save.
    let mut surface = DocumentSurface::open(&header, SystemClock, SurfaceOptions::from(&ctx.config));
    surface.mount();

    let message = match action {
        BlockCommands::Palette => {
            print!("{}", render_palette());
            return Ok(());
        }
        BlockCommands::List => {
            print!("{}", render_blocks(surface.blocks()));
            return Ok(());
        }
        BlockCommands::Add { kind, after } => {
            let kind = BlockKind::from_str(&kind)?;
            let after = match after {
                Some(selector) => Some(resolve_block(&surface, &selector)?),
                None => None,
            };
            let id = surface.insert(kind, after.as_deref());
            let position = block_position(&surface, &id);
            CmdMessage::success(format!("Added {} block {}", kind.as_str(), position))
        }
        BlockCommands::Rm { block } => {
            let id = resolve_block(&surface, &block)?;
            surface.delete(&id);
            CmdMessage::success("Block deleted")
        }
        BlockCommands::Dup { block } => {
            let id = resolve_block(&surface, &block)?;
            match surface.duplicate(&id) {
                Some(copy) => CmdMessage::success(format!("Duplicated as block {}", block_position(&surface, &copy))),
                None => CmdMessage::warning("Nothing to duplicate"),
            }
        }
        BlockCommands::Up { block } => {
            let id = resolve_block(&surface, &block)?;
            if surface.move_up(&id) {
                CmdMessage::success("Moved up")
            } else {
                CmdMessage::info("Already at the top")
            }
        }
        BlockCommands::Down { block } => {
            let id = resolve_block(&surface, &block)?;
            if surface.move_down(&id) {
                CmdMessage::success("Moved down")
            } else {
                CmdMessage::info("Already at the bottom")
            }
        }
        BlockCommands::Move { block, over } => {
            let active = resolve_block(&surface, &block)?;
            let over = resolve_block(&surface, &over)?;
            surface.reorder(&active, &over);
            CmdMessage::success("Block moved")
        }
        BlockCommands::Width { block, width } => {
            let width = BlockWidth::from_str(&width)?;
            let id = resolve_block(&surface, &block)?;
            surface.set_width(&id, Some(width));
            CmdMessage::success(format!("Width set to {}", width.as_str()))
        }
        BlockCommands::SetText { block, text } => {
            let id = resolve_block(&surface, &block)?;
            if !surface.edit(&id, |editor| editor.on_input(&text)) {
                bail!("this block has no text body, use `set` instead");
            }
            CmdMessage::success("Text updated")
        }
        BlockCommands::Set { block, field, value } => {
            let id = resolve_block(&surface, &block)?;
            surface.try_edit(&id, |editor| apply_field(editor, &field, &value))?;
            CmdMessage::success(format!("{} updated", field))
        }
    };

    if surface.is_dirty() {
        surface.save_now(&mut ctx.api);
    }
    finish_surface(surface.drain_events())?;
    surface.unmount();
    print_messages(&[message]);
    Ok(())
}

/// A block by 1-based position, full id or unique id prefix.
fn resolve_block<C: Clock>(surface: &DocumentSurface<C>, selector: &str) -> Result<String> {
    let blocks = surface.blocks();
    let wanted = selector.trim();
    if let Ok(position) = wanted.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| blocks.get(index))
            .map(|block| block.id.clone())
            .ok_or_else(|| FolioError::not_found("Block", wanted).into());
    }
    if let Some(block) = blocks.iter().find(|b| b.id == wanted) {
        return Ok(block.id.clone());
    }
    if wanted.len() < MIN_BLOCK_PREFIX {
        return Err(FolioError::not_found("Block", wanted).into());
    }
    let mut matches = blocks.iter().filter(|b| b.id.starts_with(wanted));
    match (matches.next(), matches.next()) {
        (Some(block), None) => Ok(block.id.clone()),
        (Some(_), Some(_)) => bail!("block id prefix is ambiguous: {}", wanted),
        _ => Err(FolioError::not_found("Block", wanted).into()),
    }
}

fn block_position<C: Clock>(surface: &DocumentSurface<C>, id: &str) -> usize {
    surface.blocks().iter().position(|b| b.id == id).map(|i| i + 1).unwrap_or(0)
}

/// Map a field name onto the block editor's setter.
fn apply_field(editor: &mut BlockEditor, field: &str, value: &str) -> error::Result<Option<BlockData>> {
    let data = match (editor, field) {
        (BlockEditor::Text(e), "font-size") => e.set_font_size(parse_number(field, value)?)?,
        (BlockEditor::Text(e), "color") => e.set_color(value),
        (BlockEditor::Text(e), "bg-color") => e.set_bg_color(value),
        (BlockEditor::Heading(e), "color") => e.set_color(value),
        (BlockEditor::Code(e), "code") => e.set_code(value),
        (BlockEditor::Code(e), "language") => e.set_language(value)?,
        (BlockEditor::Callout(e), "icon") => e.set_icon(value),
        (BlockEditor::Image(e), "url") => e.set_url(value),
        (BlockEditor::Image(e), "caption") => e.set_caption(value),
        (BlockEditor::Divider(e), "color") => e.set_color(value),
        (BlockEditor::Button(e), "label") => e.set_label(value),
        (BlockEditor::Button(e), "href") => e.set_href(value),
        (BlockEditor::Button(e), "color") => e.set_color(value),
        (BlockEditor::Button(e), "radius") => e.set_radius(parse_number(field, value)?),
        (BlockEditor::Badge(e), "label") => e.set_label(value),
        (BlockEditor::Badge(e), "bg-color") => e.set_bg_color(value),
        (BlockEditor::Badge(e), "text-color") => e.set_text_color(value),
        (BlockEditor::Badge(e), "radius") => e.set_radius(parse_number(field, value)?),
        (BlockEditor::Quote(e), "author") => e.set_author(value),
        (BlockEditor::Table(e), cell) if cell.starts_with("cell:") => {
            let (row, col) = parse_cell(cell)?;
            e.set_cell(row, col, value)?
        }
        (_, other) => return Err(FolioError::invalid(format!("this block has no field {}", other))),
    };
    Ok(Some(data))
}

fn parse_number(field: &str, value: &str) -> error::Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| FolioError::invalid(format!("{} must be a whole number", field)))
}

/// `cell:ROW:COL`, both 1-based.
fn parse_cell(field: &str) -> error::Result<(usize, usize)> {
    let invalid = || FolioError::invalid(format!("expected cell:ROW:COL, got {}", field));
    let mut parts = field.split(':').skip(1);
    let row: usize = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let col: usize = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if row == 0 || col == 0 || parts.next().is_some() {
        return Err(invalid());
    }
    Ok((row - 1, col - 1))
}

/// Print notices raised by a surface. An error notice fails the command.
fn finish_surface(events: Vec<SurfaceEvent>) -> Result<()> {
    let notices: Vec<Notice> = events
        .into_iter()
        .filter_map(|event| match event {
            SurfaceEvent::Notice(notice) => Some(notice),
            _ => None,
        })
        .collect();
    fail_on_errors(notices)
}

fn fail_on_errors(notices: Vec<Notice>) -> Result<()> {
    if let Some(error) = notices.iter().find(|n| n.level == MessageLevel::Error) {
        bail!("{}", error.content);
    }
    print_messages(&notices);
    Ok(())
}

// --- Navbar ---

fn handle_nav(ctx: &mut AppContext, project: &str, action: NavCommands) -> Result<()> {
    let project = ctx.api.resolve_project(project)?;
    let items = ctx.api.list_navbar_items(project.id)?.navbar_items;
    let mut editor = NavbarEditor::new(project.id, project.name.as_str(), items, SystemClock)
        .with_width_debounce(ctx.config.navbar_width_debounce());

    let message = match action {
        NavCommands::List => {
            print!("{}", render_navbar(editor.items(), &editor.positions()));
            return Ok(());
        }
        NavCommands::Add { kind } => {
            let kind = NavbarKind::from_str(&kind)?;
            match editor.add_item(&mut ctx.api, kind) {
                Some(_) => Some(CmdMessage::success(format!(
                    "Added {} as item {}",
                    kind.as_str(),
                    editor.items().len()
                ))),
                None => None,
            }
        }
        NavCommands::Rm { item } => {
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor
                .delete(&mut ctx.api, item.id)
                .then(|| CmdMessage::success("Navbar item deleted"))
        }
        NavCommands::Move { item, dx } => {
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor.drag_end(&mut ctx.api, item.id, dx);
            None
        }
        NavCommands::Resize { item, width } => {
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor.resize(item.id, width);
            None
        }
        NavCommands::Style { item, key, value } => {
            let key = StyleKey::from_str(&key)?;
            let value = key.value_from_str(&value)?;
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor.set_style(&mut ctx.api, item.id, key, value);
            None
        }
        NavCommands::Label { item, label } => {
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor.set_label(&mut ctx.api, item.id, &label);
            None
        }
        NavCommands::Href { item, href } => {
            let item = ctx.api.resolve_navbar_item(project.id, &item)?;
            editor.set_href(&mut ctx.api, item.id, &href);
            None
        }
    };

    editor.flush(&mut ctx.api);
    fail_on_errors(editor.drain_notices())?;
    match message {
        Some(message) => print_messages(&[message]),
        None => print!("{}", render_navbar(editor.items(), &editor.positions())),
    }
    Ok(())
}

// --- Export ---

fn handle_export(ctx: &AppContext, project: &str, out: Option<PathBuf>) -> Result<()> {
    let project = ctx.api.resolve_project(project)?;
    let result = ctx.api.export_project(project.id, &ctx.config.export_assets())?;

    let dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(&result.filename);
    fs::write(&path, &result.html).with_context(|| format!("writing {}", path.display()))?;

    print_messages(&[CmdMessage::success(format!("Exported to {}", path.display()))]);
    Ok(())
}

// --- Preferences ---

fn handle_prefs(ctx: &AppContext, action: Option<PrefsCommands>) -> Result<()> {
    let mut prefs = PreferenceSession::load(Box::new(FileKv::new(ctx.data_dir.join(PREFS_FILE))));

    match action {
        None => {}
        Some(PrefsCommands::Theme { mode }) => {
            match mode.as_deref().map(str::trim) {
                None => {
                    prefs.toggle_docs_theme();
                }
                Some("light") => prefs.set_docs_theme(DocsTheme::Light),
                Some("dark") => prefs.set_docs_theme(DocsTheme::Dark),
                Some(other) => bail!("unknown theme: {} (expected light or dark)", other),
            }
        }
        Some(PrefsCommands::Color { key, value }) => {
            let key = ColorKey::from_str(&key)?;
            prefs.set_color(key, &value);
        }
        Some(PrefsCommands::Reset) => prefs.reset_colors(),
    }

    print!("{}", render_prefs(prefs.preferences()));
    Ok(())
}
