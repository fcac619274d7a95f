use super::args::ColorConfig;
use crate::{report::Report, test::TestCase};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub(crate) struct Printer {
    stream: StandardStream,
}

impl Printer {
    pub(crate) fn new(color: ColorConfig) -> Self {
        let choice = match color {
            ColorConfig::Auto => ColorChoice::Auto,
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    pub(crate) fn print_running(&self, num_tests: usize) -> io::Result<()> {
        let mut w = self.stream.lock();
        writeln!(w, "running {} tests", num_tests)
    }

    pub(crate) fn print_list(&self, tests: &[&TestCase]) -> io::Result<()> {
        let mut w = self.stream.lock();
        write_list(&mut w, tests)
    }

    pub(crate) fn print_report(&self, report: &Report) -> io::Result<()> {
        let mut w = self.stream.lock();
        write_report(&mut w, report)
    }
}

fn write_list<W>(w: &mut W, tests: &[&TestCase]) -> io::Result<()>
where
    W: WriteColor,
{
    for test in tests {
        writeln!(w, "{}: test", test.name())?;
    }

    fn plural_suffix(n: usize) -> &'static str {
        match n {
            1 => "",
            _ => "s",
        }
    }

    if !tests.is_empty() {
        writeln!(w)?;
    }
    writeln!(w, "{} test{}", tests.len(), plural_suffix(tests.len()))
}

fn write_report<W>(w: &mut W, report: &Report) -> io::Result<()>
where
    W: WriteColor,
{
    let banner = if report.is_passed() {
        colored("ALL TESTS PASSED").fg(Color::Green)
    } else {
        colored("TEST FAILED").fg(Color::Red)
    };
    banner.fmt_colored(w)?;
    writeln!(w)?;

    if report.filtered_out != 0 {
        writeln!(
            w,
            "Tests run: {} ({} filtered out)",
            report.tests_run, report.filtered_out
        )
    } else {
        writeln!(w, "Tests run: {}", report.tests_run)
    }
}

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FailedTest;
    use termcolor::NoColor;

    fn render(report: &Report) -> String {
        let mut w = NoColor::new(Vec::new());
        write_report(&mut w, report).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn passed_banner() {
        let report = Report {
            tests_run: 2,
            failed: None,
            filtered_out: 0,
        };
        assert_eq!(render(&report), "ALL TESTS PASSED\nTests run: 2\n");
    }

    #[test]
    fn failed_banner() {
        let report = Report {
            tests_run: 1,
            failed: Some(FailedTest {
                name: "broken",
                message: None,
            }),
            filtered_out: 0,
        };
        assert_eq!(render(&report), "TEST FAILED\nTests run: 1\n");
    }

    #[test]
    fn filtered_out_count_is_reported() {
        let report = Report {
            tests_run: 1,
            failed: None,
            filtered_out: 2,
        };
        assert_eq!(
            render(&report),
            "ALL TESTS PASSED\nTests run: 1 (2 filtered out)\n"
        );
    }
}
