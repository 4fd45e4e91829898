//! Plot four sine waves to `SineWaves.png`, or to `SineWaves.svg`
//! when run with the single argument `svg`.

use sinewaves::{Demo, Device, Matplotlib, Stream};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let device = Device::from_args(std::env::args().skip(1));
    let mut stream = Stream::new(Matplotlib::new());
    Demo::default().run(&mut stream, device)?;
    println!("Matplotlib library version: {}", stream.version()?);
    Ok(())
}
