// 切换工作目录, 单独放在一个测试二进制中
#[cfg(test)]
mod tests {
    use app_icon::icon_data::decode_icon;
    use app_icon::writer::{ICON_PATH, write_png};
    use std::{env, fs, path::Path};

    #[test]
    fn write_png_targets_fixed_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        env::set_current_dir(dir.path()).unwrap();

        // 目录不存在时失败, 不创建任何内容
        assert!(write_png(32, 32).is_err());
        assert!(!Path::new("assets").exists());

        fs::create_dir_all("assets/icons").unwrap();
        write_png(32, 32).unwrap();
        assert_eq!(fs::read(ICON_PATH).unwrap(), decode_icon().unwrap());
        assert_eq!(
            fs::read(dir.path().join("assets/icons/app_icon.png")).unwrap(),
            decode_icon().unwrap()
        );
    }
}
