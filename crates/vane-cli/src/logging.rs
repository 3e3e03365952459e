use std::io;

use nu_ansi_term::Color::{Blue, Magenta, Red, Yellow};
use tracing::{field::Field, Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{FmtSpan, Writer},
        FmtContext, FormatEvent, FormatFields, MakeWriter,
    },
    registry::LookupSpan,
};

use crate::{cli::Args, utils::Colored};

/// Tag printed before the message. INFO stays untagged so plain output
/// reads like ordinary CLI output.
fn level_tag(level: Level) -> Option<Colored<&'static str>> {
    match level {
        Level::ERROR => Some(Colored(Red, "[ERROR]")),
        Level::WARN => Some(Colored(Yellow, "[WARN]")),
        Level::INFO => None,
        Level::DEBUG => Some(Colored(Blue, "[DEBUG]")),
        Level::TRACE => Some(Colored(Magenta, "[TRACE]")),
    }
}

/// Extracts the `message` field of an event and drops everything else;
/// structured fields belong to the json formatter.
#[derive(Default)]
struct EventText {
    text: Option<String>,
}

impl tracing::field::Visit for EventText {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.text = Some(format!("{value:?}"));
        }
    }
}

pub struct TagFormatter;

impl<S, N> FormatEvent<S, N> for TagFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        if let Some(tag) = level_tag(*event.metadata().level()) {
            write!(writer, "{tag} ")?;
        }

        let mut message = EventText::default();
        event.record(&mut message);
        match message.text {
            Some(text) => writeln!(writer, "{text}"),
            None => writeln!(writer),
        }
    }
}

/// Plain INFO output goes to stdout, everything else to stderr.
pub enum StdStream {
    Out(io::Stdout),
    Err(io::Stderr),
}

impl io::Write for StdStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Out(out) => out.write(buf),
            Self::Err(err) => err.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Out(out) => out.flush(),
            Self::Err(err) => err.flush(),
        }
    }
}

struct StreamWriter;

impl<'a> MakeWriter<'a> for StreamWriter {
    type Writer = StdStream;

    fn make_writer(&'a self) -> Self::Writer {
        StdStream::Out(io::stdout())
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        if meta.level() == &Level::INFO {
            StdStream::Out(io::stdout())
        } else {
            StdStream::Err(io::stderr())
        }
    }
}

pub fn setup_logging(args: &Args) {
    let filter_level = if args.quiet {
        Level::ERROR
    } else if args.verbose >= 2 {
        Level::TRACE
    } else if args.verbose == 1 {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(format!(
            "vane={filter_level},vane_core={filter_level},vane_config={filter_level},vane_dl={filter_level}"
        ))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(StreamWriter)
        .compact()
        .without_time();

    let subscriber: Box<dyn Subscriber + Send + Sync> = if args.json {
        Box::new(builder.json().flatten_event(true).finish())
    } else {
        Box::new(builder.event_format(TagFormatter).finish())
    };

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
