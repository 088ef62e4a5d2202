use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else {
        // Keep include_dir! satisfied before the first frontend build.
        let placeholder = out_dir.join("dist");
        fs::create_dir_all(&placeholder).unwrap();
        let index = placeholder.join("index.html");
        if !index.exists() {
            fs::write(
                index,
                "<!DOCTYPE html><html><body><p>Frontend bundle not built yet. Run trunk build \
                 in frontend/ and rebuild.</p></body></html>",
            )
            .unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
