// ABOUTME: Interactive page generation for the termconf application
// ABOUTME: Renders the terminal-style index.html from the conference config

use crate::conference::ConferenceConfig;
use crate::config::Layout;
use crate::utils::escape_html;

const NAV_INDENT: &str = "\n            ";
const THEME_INDENT: &str = "\n                ";

/// Build the interactive page.
///
/// Only the ASCII-art banner is entity-escaped. Title, subtitle, description,
/// author, date and location are interpolated verbatim, so markup in those
/// config fields reaches the page as markup.
pub fn generate_index_html(config: &ConferenceConfig, layout: Layout) -> String {
    let conference = &config.conference;

    let nav_buttons = config
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<button class="nav-btn" data-cmd="{}">{} {}</button>"#,
                section.id, section.icon, section.label
            )
        })
        .collect::<Vec<_>>()
        .join(NAV_INDENT);

    let theme_buttons = config
        .themes
        .iter()
        .map(|theme| format!(r#"<button data-theme="{}">{}</button>"#, theme.id, theme.name))
        .collect::<Vec<_>>()
        .join(THEME_INDENT);

    let ascii_art = escape_html(config.ascii_art.as_deref().unwrap_or(""));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <meta name="author" content="{author}">
    <title>{title} - {subtitle}</title>
    <link rel="stylesheet" href="{style}">
    <link rel="stylesheet" href="{print_style}" media="print">
</head>
<body>

    <!-- Persistent Menu -->
    <nav class="top-nav">
        <div class="nav-left">
            <button class="nav-btn nav-btn-home" data-cmd="home">🏠 Home</button>
            {nav_buttons}
            <button class="nav-btn" data-cmd="help">❓ Help</button>
            <button class="nav-btn" data-cmd="save">💾 Save</button>
            <button class="nav-btn" data-cmd="clear">🗑️ Clear</button>
        </div>
        <div class="nav-right">
            <button id="theme-toggle" class="nav-btn" title="Change theme">🎨 Theme</button>
            <div id="theme-menu" class="hidden">
                {theme_buttons}
            </div>
        </div>
    </nav>

    <div id="terminal">
        <!-- ASCII Art Title -->
        <pre id="ascii-title" class="ascii-art">{ascii_art}</pre>

        <!-- Mobile Title (shown on mobile instead of welcome box) -->
        <div class="mobile-title hidden" id="mobile-title">
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
            <p class="dates">{date} | {location}</p>
            <div class="mobile-instructions">
                <p>👆 Use the buttons above to navigate</p>
                <p>💬 Or type commands below</p>
            </div>
        </div>

        <div id="output"></div>

        <!-- Content Display Area -->
        <div id="content-display" class="hidden"></div>

        <!-- Enhanced Prompt -->
        <div class="input-line">
            <span class="prompt" id="prompt-text">{username}@{hostname}:~$</span>
            <input type="text" id="command-input" placeholder="Type a command (try 'help' or press TAB)..." autofocus autocomplete="off" spellcheck="false">
        </div>
    </div>

    <script src="{config_script}"></script>
    <script src="{app_script}"></script>
</body>
</html>"#,
        description = config.site.description,
        author = config.site.author,
        title = conference.title,
        subtitle = conference.subtitle,
        date = conference.date,
        location = conference.location,
        style = layout.style_href(),
        print_style = layout.print_style_href(),
        nav_buttons = nav_buttons,
        theme_buttons = theme_buttons,
        ascii_art = ascii_art,
        username = config.terminal.username,
        hostname = config.terminal.hostname,
        config_script = layout.config_script_src(),
        app_script = layout.app_script_src(),
    )
}
