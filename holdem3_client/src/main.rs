mod app;
mod layout;
mod theme;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use futures_util::StreamExt;
use tokio::select;
use tokio::time::MissedTickBehavior;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::backend::{Backend, CrosstermBackend};
use tui::Terminal;

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "holdem3", about = "德州扑克3 终端版")]
struct Args {
    /// 随机种子，相同种子发出相同的牌
    #[arg(long)]
    seed: Option<u64>,

    /// 每秒刷新帧数
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value = "holdem3.log")]
    log_file: PathBuf,

    /// 发一局牌，把牌桌快照以 JSON 打印到标准输出后退出
    #[arg(long)]
    dump: bool,
}

/// 标准输出归界面所有，日志写到文件里
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let mut app = App::new(args.seed);
    if args.dump {
        println!("{}", serde_json::to_string_pretty(&app.state.view())?);
        return Ok(());
    }

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    info!("界面启动，{} 帧每秒", args.fps);

    // 先恢复终端，再汇报循环里的错误
    let result = run(&mut terminal, &mut app, args.fps).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;
    info!("界面退出");
    result?;
    Ok(())
}

/// 主循环：帧时钟和键盘事件在同一个线程上交替处理，状态修改和绘制不会交错
async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, fps: u32) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut frame_clock = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps.max(1))));
    frame_clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        select! {
            _ = frame_clock.tick() => {
                app.on_tick();
                terminal.draw(|f| ui::draw(f, app))?;
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.on_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
    }
    Ok(())
}
