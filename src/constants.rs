/// Fixed values shared by the resizer and the heart generator

pub mod mipmap {
    /// One Android density bucket: output folder and square edge in pixels
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Density {
        pub folder: &'static str,
        pub size: u32,
    }

    /// Density table in output order
    pub const DENSITIES: &[Density] = &[
        Density { folder: "mipmap-mdpi", size: 48 },
        Density { folder: "mipmap-hdpi", size: 72 },
        Density { folder: "mipmap-xhdpi", size: 96 },
        Density { folder: "mipmap-xxhdpi", size: 144 },
        Density { folder: "mipmap-xxxhdpi", size: 192 },
    ];

    pub const SQUARE_ICON_NAME: &str = "ic_launcher.png";
    pub const ROUND_ICON_NAME: &str = "ic_launcher_round.png";
}

pub mod paths {
    pub const DEFAULT_SOURCE: &str = "logoapp.png";
    pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";
    /// Looked up in the working directory when no --config is given
    pub const DEFAULT_CONFIG_FILE: &str = "icons.yaml";
}

pub mod heart {
    use image::Rgba;

    /// Edge length of the generated master logo
    pub const MASTER_SIZE: u32 = 1024;

    /// Points sampled along the heart curve over one full turn
    pub const CURVE_SAMPLES: usize = 360;

    /// Heart width as a fraction of the canvas
    pub const WIDTH_FRACTION: f32 = 0.6;

    /// Background corner radius as a fraction of the canvas
    pub const CORNER_RADIUS_FRACTION: f32 = 0.22;

    /// Rotation applied to the gradient field, in degrees
    pub const GRADIENT_ANGLE_DEG: f32 = 45.0;

    pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const GREEN: [u8; 3] = [34, 197, 94]; // #22C55E
    pub const BLUE: [u8; 3] = [59, 130, 246]; // #3B82F6
    pub const YELLOW: [u8; 3] = [250, 204, 21]; // #FACC15
}
