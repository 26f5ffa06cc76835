use formpack::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    source: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "formpack watch");
    header.add("Source", source);
    header.add("Output", output);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { source, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), source)
        }
        WatchEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::RebuildStarted => {
            format!("{} {} Rebuilding...\n", prefix, icon(Icon::Progress))
        }
        WatchEvent::TemplateFailed {
            name,
            message,
            retained,
        } => {
            let kept = if *retained {
                " (previous version kept)"
            } else {
                ""
            };
            format!(
                "{} {} {}: {}{}\n",
                prefix,
                icon(Icon::Error),
                name,
                message,
                kept
            )
        }
        WatchEvent::RebuildComplete {
            compiled,
            failed,
            templates,
            written,
        } => {
            let status = if !*written {
                Icon::Error
            } else if *failed > 0 {
                Icon::Warning
            } else {
                Icon::Success
            };
            let mut line = format!(
                "{} {} Rebuilt: {} compiled",
                prefix,
                icon(status),
                compiled
            );
            if *failed > 0 {
                line.push_str(&format!(", {} failed", failed));
            }
            line.push_str(&format!(", {} in bundle", templates));
            if !*written {
                line.push_str(", bundle not written");
            }
            line.push('\n');
            line
        }
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => {
            format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch))
        }
    }
}
