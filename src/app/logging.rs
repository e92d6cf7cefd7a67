use log::{Level, LevelFilter};
use std::io::Write as _;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor as _};

const LEVEL_FILTERS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

static APP_LOGGER_LEVEL: AtomicUsize = AtomicUsize::new(LevelFilter::Warn as usize);
static APP_LOGGER_COLOR: AtomicU8 = AtomicU8::new(COLOR_AUTO);

const COLOR_AUTO: u8 = 0;
const COLOR_ALWAYS: u8 = 1;
const COLOR_ALWAYS_ANSI: u8 = 2;
const COLOR_NEVER: u8 = 3;

/// Writes log records to stderr as `level(target): message`. Standard output
/// only ever carries results.
pub struct AppLogger;

impl AppLogger {
    pub fn init() -> &'static AppLogger {
        log::set_max_level(Self::instance().level());
        Self::instance()
    }

    pub fn instance() -> &'static AppLogger {
        static INSTANCE: AppLogger = AppLogger;
        &INSTANCE
    }

    pub fn level(&self) -> LevelFilter {
        let idx = APP_LOGGER_LEVEL.load(Ordering::Relaxed);
        LEVEL_FILTERS
            .get(idx)
            .copied()
            .unwrap_or(LevelFilter::Trace)
    }

    pub fn color_choice(&self) -> ColorChoice {
        match APP_LOGGER_COLOR.load(Ordering::Relaxed) {
            COLOR_ALWAYS => ColorChoice::Always,
            COLOR_ALWAYS_ANSI => ColorChoice::AlwaysAnsi,
            COLOR_NEVER => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    pub fn set_level(&self, level: LevelFilter) {
        APP_LOGGER_LEVEL.store(level as usize, Ordering::Relaxed);
        log::set_max_level(level);
    }

    pub fn set_color_choice(&self, color: ColorChoice) {
        let color = match color {
            ColorChoice::Always => COLOR_ALWAYS,
            ColorChoice::AlwaysAnsi => COLOR_ALWAYS_ANSI,
            ColorChoice::Never => COLOR_NEVER,
            ColorChoice::Auto => COLOR_AUTO,
        };
        APP_LOGGER_COLOR.store(color, Ordering::Relaxed);
    }

    fn write_log(&self, record: &log::Record) -> std::io::Result<()> {
        let (level, color) = match record.level() {
            Level::Error => ("error", Color::Red),
            Level::Warn => ("warning", Color::Yellow),
            Level::Info => ("info", Color::Blue),
            Level::Debug => ("debug", Color::Green),
            Level::Trace => ("trace", Color::Magenta),
        };

        let mut output = StandardStream::stderr(self.color_choice());

        let mut level_color = ColorSpec::new();
        level_color.set_fg(Some(color)).set_bold(true);
        let mut reset_color = ColorSpec::new();
        reset_color.set_reset(true);

        output.set_color(&level_color)?;
        write!(output, "{:>width$}(", level, width = 7)?;
        output.set_color(&reset_color)?;
        write!(output, "{}", record.target())?;
        output.set_color(&level_color)?;
        write!(output, "): ")?;
        output.set_color(&reset_color)?;
        writeln!(output, "{}", record.args())?;

        Ok(())
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // nowhere left to report a failing stderr
        let _ = self.write_log(record);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
