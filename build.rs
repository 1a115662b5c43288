//! 构建时生成表盘样式的 icon.ico 并嵌入 Windows 可执行文件

/// 表盘：红色外圈
const RIM: (u8, u8, u8) = (200, 30, 30);
/// 表盘：浅灰盘面
const DIAL: (u8, u8, u8) = (196, 196, 196);

fn make_rgba_dial(size: u32) -> Vec<u8> {
    let cx = (size as f32) * 0.5;
    let cy = (size as f32) * 0.5;
    let outer = (size as f32) * 0.46;
    let inner = (size as f32) * 0.34;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32) + 0.5 - cx;
            let dy = (y as f32) + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= inner {
                rgba.extend_from_slice(&[DIAL.0, DIAL.1, DIAL.2, 255]);
            } else if d <= outer {
                rgba.extend_from_slice(&[RIM.0, RIM.1, RIM.2, 255]);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    rgba
}

fn main() {
    #[cfg(windows)]
    {
        let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
        let icon_path = manifest_dir.join("icon.ico");

        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for &size in &[16u32, 32u32, 48u32] {
            let rgba = make_rgba_dial(size);
            let image = ico::IconImage::from_rgba_data(size, size, rgba);
            let entry = ico::IconDirEntry::encode(&image).expect("encode icon entry");
            icon_dir.add_entry(entry);
        }

        let mut file = std::fs::File::create(&icon_path).expect("create icon.ico");
        icon_dir.write(&mut file).expect("write icon.ico");

        let mut res = winres::WindowsResource::new();
        res.set_icon("icon.ico");
        if let Err(e) = res.compile() {
            eprintln!("winres: {} (missing Windows SDK/rc.exe is fine, icon just won't embed)", e);
        }
    }
    #[cfg(not(windows))]
    let _ = make_rgba_dial;
}
