use serde::{Deserialize, Serialize};

use crate::media::{
    MediaCollections, MediaGroup, MediaGroups, MediaItem, MediaItemSpec, MediaRole, MediaSource,
    MediaType, normalize_items,
};

/// Active site language. Content is a two-key lookup, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The three fixed top-level theme tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Tian,
    Ren,
    Di,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Tian => "tian",
            ThemeId::Ren => "ren",
            ThemeId::Di => "di",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    Planning,
}

impl Status {
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Status::Completed, Lang::En) => "Completed",
            (Status::Completed, Lang::Zh) => "已完成",
            (Status::InProgress, Lang::En) => "In Progress",
            (Status::InProgress, Lang::Zh) => "进行中",
            (Status::Planning, Lang::En) => "Planning",
            (Status::Planning, Lang::Zh) => "规划中",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub date: String,
    pub text: String,
}

/// Background image descriptor for a project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
}

/// A single portfolio work. Immutable static data; all remote documents are
/// fetched lazily through the text cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub status: Status,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_items: Option<Vec<MediaItemSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_groups: Option<MediaGroups>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<UpdateEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates_txt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_txt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview_txt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_pdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_txt: Option<String>,
}

impl Project {
    pub fn new(slug: &str, title: &str, status: Status, summary: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            status,
            summary: summary.to_string(),
            tags: Vec::new(),
            bg: None,
            media: None,
            media_items: None,
            media_groups: None,
            updates: Vec::new(),
            updates_txt: None,
            doc_txt: None,
            overview_txt: None,
            doc_pdf: None,
            brief_txt: None,
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn bg(mut self, src: &str, position: &str, fit: Option<&str>) -> Self {
        self.bg = Some(Background {
            src: src.to_string(),
            position: Some(position.to_string()),
            fit: fit.map(str::to_string),
        });
        self
    }

    pub fn media(mut self, media: MediaSource) -> Self {
        self.media = Some(media);
        self
    }

    pub fn media_items(mut self, items: Vec<MediaItemSpec>) -> Self {
        self.media_items = Some(items);
        self
    }

    pub fn media_groups(mut self, groups: MediaGroups) -> Self {
        self.media_groups = Some(groups);
        self
    }

    pub fn updates(mut self, entries: &[(&str, &str)]) -> Self {
        self.updates = entries
            .iter()
            .map(|(date, text)| UpdateEntry {
                date: date.to_string(),
                text: text.to_string(),
            })
            .collect();
        self
    }

    pub fn updates_txt(mut self, path: &str) -> Self {
        self.updates_txt = Some(path.to_string());
        self
    }

    pub fn doc_txt(mut self, path: &str) -> Self {
        self.doc_txt = Some(path.to_string());
        self
    }

    pub fn overview_txt(mut self, path: &str) -> Self {
        self.overview_txt = Some(path.to_string());
        self
    }

    pub fn doc_pdf(mut self, path: &str) -> Self {
        self.doc_pdf = Some(path.to_string());
        self
    }

    /// Attach the brief document path derived from a display title
    /// (slashes, dashes and whitespace runs become underscores).
    pub fn brief(mut self, title: &str) -> Self {
        self.brief_txt = Some(brief_path(title));
        self
    }

    /// The flat per-kind collections, when `media` uses that shape.
    pub fn media_collections(&self) -> Option<&MediaCollections> {
        match &self.media {
            Some(MediaSource::Collections(c)) => Some(c),
            _ => None,
        }
    }

    /// Typed media items: the `media` field when it is an item list, the
    /// dedicated `media_items` field otherwise.
    pub fn typed_media_items(&self) -> &[MediaItemSpec] {
        if let Some(MediaSource::Items(items)) = &self.media {
            if !items.is_empty() {
                return items;
            }
        }
        self.media_items.as_deref().unwrap_or(&[])
    }

    /// Declared items resolved to concrete ones; unresolvable items dropped.
    pub fn normalized_media(&self) -> Vec<MediaItem> {
        normalize_items(self.typed_media_items())
    }
}

/// One of the three fixed content categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub title: String,
    pub intro: String,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub reading: Vec<String>,
}

impl Theme {
    fn new(id: ThemeId, title: &str, intro: &str, projects: Vec<Project>, reading: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            intro: intro.to_string(),
            projects,
            reading: reading.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Language-keyed content tree. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub en: Vec<Theme>,
    pub zh: Vec<Theme>,
}

impl ContentStore {
    pub fn themes(&self, lang: Lang) -> &[Theme] {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => &self.zh,
        }
    }

    pub fn find_project(&self, lang: Lang, slug: &str) -> Option<&Project> {
        self.themes(lang)
            .iter()
            .flat_map(|theme| theme.projects.iter())
            .find(|project| project.slug == slug)
    }
}

/// Derive the brief document path from a title: `/brief/<name>.txt` with
/// slashes, backslashes, dashes and whitespace runs collapsed to underscores.
pub fn brief_path(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
                in_space = true;
            }
        } else {
            in_space = false;
            match ch {
                '/' | '\\' | '-' => name.push('_'),
                other => name.push(other),
            }
        }
    }
    format!("/brief/{name}.txt")
}

/// Exhibition-format label per project slug, used as the brief fallback.
pub fn project_type_label(slug: &str) -> &'static str {
    match slug {
        "fitting-reality" => "Interactive Installation",
        "electromagnetic-decay" => "Audio-Reactive Installation",
        "dys-utopia" => "Interactive Instantiation Model",
        "bloom-system" => "Experimental Imaging System",
        _ => "",
    }
}

fn item(media_type: MediaType, role: MediaRole, src: &str, title: Option<&str>) -> MediaItemSpec {
    MediaItemSpec {
        media_type: Some(media_type),
        role: Some(role),
        src: src.to_string(),
        title: title.map(str::to_string),
        description: None,
    }
}

fn group(label: &str, items: &[&str]) -> MediaGroup {
    MediaGroup {
        label: label.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
    }
}

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

const DECAY_AUDIO_V1: [&str; 4] = [
    "/testdemoV1_20250928_161549_demo_clean.wav",
    "/testdemoV1_20250928_161549_demo_fm.wav",
    "/testdemoV1_20250928_161549_demo_fx.wav",
    "/testdemoV1_20250928_161549_demo_fxfm.wav",
];

const DECAY_AUDIO_V2: [&str; 4] = [
    "/testdemoV2_20250928_163730_demo_clean.wav",
    "/testdemoV2_20250928_163730_demo_fm.wav",
    "/testdemoV2_20250928_163730_demo_fx.wav",
    "/testdemoV2_20250928_163730_demo_fxfm.wav",
];

fn decay_audio_flat() -> Vec<String> {
    DECAY_AUDIO_V1
        .iter()
        .chain(DECAY_AUDIO_V2.iter())
        .map(|s| s.to_string())
        .collect()
}

fn standard_shoot(slug: &str, titles: [&str; 12]) -> Vec<MediaItemSpec> {
    use MediaRole::*;
    use MediaType::*;
    vec![
        item(Image, Hero, &format!("/{slug}/hero/hero_01.jpg"), Some(titles[0])),
        item(Image, Hero, &format!("/{slug}/hero/hero_02.jpg"), Some(titles[1])),
        item(Video, Experience, &format!("/{slug}/experience/experience_01.mp4"), Some(titles[2])),
        item(Image, Experience, &format!("/{slug}/experience/experience_02.jpg"), Some(titles[3])),
        item(Image, Doc, &format!("/{slug}/docs/doc_01.jpg"), None),
        item(Image, Doc, &format!("/{slug}/docs/doc_02.jpg"), None),
        item(Image, System, &format!("/{slug}/system/system_diagram_01.png"), Some(titles[4])),
        item(Image, System, &format!("/{slug}/system/system_diagram_02.png"), Some(titles[5])),
        item(Image, Concept, &format!("/{slug}/concept/concept_sketch_01.jpg"), Some(titles[6])),
        item(Image, Concept, &format!("/{slug}/concept/concept_sketch_02.jpg"), Some(titles[7])),
        item(Image, Process, &format!("/{slug}/process/process_setup_01.jpg"), Some(titles[8])),
        item(Image, Process, &format!("/{slug}/process/process_setup_02.jpg"), Some(titles[9])),
        // last two title slots reserved for variants that add extra stills
        item(Image, Experience, &format!("/{slug}/experience/experience_03.jpg"), Some(titles[10])),
        item(Video, Experience, &format!("/{slug}/experience/experience_02.mp4"), Some(titles[11])),
    ]
}

/// The built-in bilingual content table. Mirrors the published site data:
/// three themes, four projects, English and Chinese variants.
pub fn builtin_content() -> ContentStore {
    ContentStore {
        en: english_themes(),
        zh: chinese_themes(),
    }
}

fn english_themes() -> Vec<Theme> {
    use MediaRole::*;
    use MediaType::*;

    let fitting_reality = Project::new(
        "fitting-reality",
        "Fitting Reality",
        Status::InProgress,
        "Using distortion, noise, and data ghosts to present how technology 'fits' reality and human perception. — [Add: project intro, media, video links]",
    )
    .tags(&["Tech Domination", "Ontology", "Perceptual Distortion"])
    .bg("/bg-fitting-reality.jpg", "center", None)
    .media(MediaSource::Collections(MediaCollections::default()))
    .media_items(standard_shoot(
        "fitting-reality",
        [
            "Installation view",
            "Installation detail",
            "Demo loop",
            "Experience still",
            "System diagram",
            "System diagram 02",
            "Concept sketch 01",
            "Concept sketch 02",
            "Process still",
            "Process still 02",
            "Experience still 03",
            "Demo loop 02",
        ],
    ))
    .updates(&[
        ("2025-09-20", "Sketched new installation layout; tested camera-based distortion pipeline."),
        ("2025-08-12", "Prototype shader for data ghost finalized."),
    ])
    .brief("Fitting Reality");

    let electromagnetic_decay = Project::new(
        "electromagnetic-decay",
        "Electromagnetic Decay",
        Status::InProgress,
        "Aesthetic translation of the electromagnetic spectrum: from interference, attenuation to the sonic-visual narrative of control desire. — [Add: project intro, installation images, demo video]",
    )
    .tags(&["Electromagnetic", "Control/Interference", "Nihilism"])
    .bg("/bg-electromagnetic-decay.jpg", "center", Some("cover"))
    .media(MediaSource::Collections(MediaCollections {
        images: paths(&["/em-decay-1.jpg", "/em-decay-2.jpg"]),
        videos: paths(&["/Decay.mp4"]),
        audios: decay_audio_flat(),
    }))
    .media_groups(MediaGroups {
        images: vec![group("Installation", &["/em-decay-1.jpg", "/em-decay-2.jpg"])],
        videos: vec![group("Demo Video", &["/Decay.mp4"])],
        audios: vec![group("Demo V1", &DECAY_AUDIO_V1), group("Demo V2", &DECAY_AUDIO_V2)],
    })
    .media_items(vec![
        item(Image, Hero, "/electromagnetic-decay/hero/hero_01.jpg", Some("Spectral view")),
        item(Image, Hero, "/electromagnetic-decay/hero/hero_02.jpg", Some("Spectral view 02")),
        item(Video, Experience, "/electromagnetic-decay/experience/experience_01.mp4", Some("Experience loop")),
        item(Video, Experience, "/electromagnetic-decay/experience/experience_02.mp4", Some("Experience loop 02")),
        item(Image, Experience, "/electromagnetic-decay/experience/experience_03.jpg", Some("Experience still")),
        item(Audio, Doc, "/electromagnetic-decay/docs/doc_01.wav", Some("Documentation audio")),
        item(Image, Doc, "/electromagnetic-decay/docs/doc_01.jpg", None),
        item(Image, Doc, "/electromagnetic-decay/docs/doc_02.jpg", None),
        item(Image, System, "/electromagnetic-decay/system/system_diagram_01.png", Some("Signal flow")),
        item(Image, System, "/electromagnetic-decay/system/system_diagram_02.png", Some("Signal flow 02")),
        item(Image, Concept, "/electromagnetic-decay/concept/concept_sketch_01.jpg", Some("Concept sketch")),
        item(Image, Concept, "/electromagnetic-decay/concept/concept_sketch_02.jpg", Some("Concept sketch 02")),
        item(Image, Process, "/electromagnetic-decay/process/process_setup_01.jpg", Some("Process still")),
        item(Image, Process, "/electromagnetic-decay/process/process_setup_02.jpg", Some("Process still 02")),
    ])
    .updates(&[
        ("v0.1", "Prototype — Used sounddevice to capture mic input; Integrated rtlsdr for SDR sampling + FM demodulation; Command-line only, low interactivity"),
        ("v0.3", "FX First Edition — Added Low-pass + Tremolo + Pink Noise FX chain; Supported 3 modes: CLEAN / FX / FX+FM; Hotkeys: 1/2/3 switch modes; q quit"),
        ("v0.5", "Multitrack Recording — Added recording: r start/stop; Auto-save clean/fx/fxfm 3-track WAV; File names with timestamp + tag"),
        ("v0.7", "Adjustable Decay Feel — Extended hotkeys: control mix, FM overlay, noise level, LPF min/max, tremolo rate/depth; Added SDR freq/gain control; Added RSSI mapping window for dynamics"),
        ("v1.0", "Stable Release — Full hotkey system + status print; Fixed stdin freeze, auto restore terminal; Better error handling, graceful exit"),
        ("v1.2", "Application — Added run.sh: auto-detect devices; Added launch.sh + install.sh: desktop launcher; Unified save path ~/captures"),
        ("v1.3", "Optimization — Auto-save pending data on stop/exit; Simplified logs, cleaner error handling; Auto fallback for PortAudio format errors"),
    ])
    .updates_txt("/updates/electromagnetic-decay.txt")
    .brief("Electromagnetic Decay");

    let dys_utopia = Project::new(
        "dys-utopia",
        "Dys/Utopia",
        Status::Completed,
        "Visualizing 'a thousand thoughts' and 'nihilistic invisibility' with particles/melting/mirrored heads. — [Add: tech stack, interaction logic, video]",
    )
    .tags(&["Ruminative Thinking", "Perception", "Generative Visuals"])
    .bg("/bg-dys-utopia.jpg", "50% 40%", Some("cover"))
    .media(MediaSource::Collections(MediaCollections {
        videos: paths(&["/dys-utopia.mp4"]),
        ..Default::default()
    }))
    .media_groups(MediaGroups {
        videos: vec![group("Final", &["/dys-utopia.mp4"])],
        ..Default::default()
    })
    // only a PDF is published; missing TXT/MD would 404
    .doc_pdf("/Dys_Utopia_Report.pdf")
    .media_items(standard_shoot(
        "dys-utopia",
        [
            "Installation view",
            "Installation detail",
            "Experience loop",
            "Experience still",
            "System diagram",
            "System diagram 02",
            "Concept sketch",
            "Concept sketch 02",
            "Process still",
            "Process still 02",
            "Experience still 03",
            "Experience loop 02",
        ],
    ))
    .updates(&[
        ("2025-05-03", "Exhibition screening; received audience feedback on interaction pacing."),
        ("2025-04-02", "Project completed and archived."),
    ])
    .brief("Dys/Utopia");

    let bloom_system = Project::new(
        "bloom-system",
        "Bloom System",
        Status::Planning,
        "Organizing the 'geography–memory–identity' triangle through images, sounds, and textual narratives; exploring contemporary re-narratives of ethnic/regional cultures. — [Add: field materials and plans]",
    )
    .tags(&["Body Data", "Noise System", "Image Distortion"])
    .bg("/bg-roots.jpg", "center", None)
    .media(MediaSource::Collections(MediaCollections::default()))
    .doc_txt("/docs/roots-and-lands.md")
    .overview_txt("/docs/roots-and-lands-overview.txt")
    .media_items(standard_shoot(
        "bloom-system",
        [
            "Field still",
            "Field still 02",
            "Experience loop",
            "Experience still",
            "System diagram",
            "System diagram 02",
            "Concept sketch",
            "Concept sketch 02",
            "Process still",
            "Process still 02",
            "Experience still 03",
            "Experience loop 02",
        ],
    ))
    .updates(&[("2025-09-01", "Collected field photos and ambient recordings in hometown area.")])
    .brief("Bloom System");

    vec![
        Theme::new(
            ThemeId::Tian,
            "Technology",
            "The influence of technological domination and ontology on contemporary youth cognition; the oppression and nihilistic tone brought by information overload and control.",
            vec![fitting_reality, electromagnetic_decay],
            &[
                "Heidegger – The Question Concerning Technology",
                "Ellul – The Technological Society",
                "Simondon – On the Mode of Existence of Technical Objects",
            ],
        ),
        Theme::new(
            ThemeId::Ren,
            "Rumination",
            "The dilemma of highly sensitive individuals in ruminative thinking; the tension between multi-threaded thoughts and self-collapse.",
            vec![dys_utopia],
            &[
                "Sartre – Being and Nothingness (selected)",
                "Kernis – Self-Esteem Stability Model (linking self-evaluation and instability)",
            ],
        ),
        Theme::new(
            ThemeId::Di,
            "Connection",
            "Explores how subjective experience enters the system as data and, through feedback loops, is transformed into new visual and emotional patterns.",
            vec![bloom_system],
            &[
                "Yi-Fu Tuan – Space and Place",
                "Pauline Boss – Ambiguous Loss (linked to cultural dimensions of 'dispersal/absence')",
            ],
        ),
    ]
}

fn chinese_themes() -> Vec<Theme> {
    use MediaRole::*;
    use MediaType::*;

    let fitting_reality = Project::new(
        "fitting-reality",
        "拟合现实",
        Status::InProgress,
        "以失真、噪点与数据残影呈现技术如何‘拟合’现实与人的感知。——【补充：项目简介、媒体、视频链接】",
    )
    .tags(&["技术统治", "存在论", "感知失真"])
    .bg("/bg-fitting-reality.jpg", "center", None)
    .media(MediaSource::Collections(MediaCollections::default()))
    .media_items(standard_shoot(
        "fitting-reality",
        [
            "装置视角",
            "装置细节",
            "体验片段",
            "体验静帧",
            "系统示意",
            "系统示意 02",
            "概念草图",
            "概念草图 02",
            "过程照片",
            "过程照片 02",
            "体验静帧 03",
            "体验片段 02",
        ],
    ))
    .updates(&[
        ("2025-09-20", "绘制装置新布局草图；测试基于摄像头的失真管线。"),
        ("2025-08-12", "完成数据残影着色器原型。"),
    ])
    .brief("Fitting Reality");

    let electromagnetic_decay = Project::new(
        "electromagnetic-decay",
        "电磁腐烂",
        Status::InProgress,
        "电磁频谱的美学转译：从干扰、衰减到控制欲望的声像叙事。——【补充：项目简介、装置图、演示视频】",
    )
    .tags(&["电磁", "控制/干扰", "虚无主义"])
    .bg("/bg-electromagnetic-decay.jpg", "center", Some("cover"))
    .media(MediaSource::Collections(MediaCollections {
        images: paths(&["/em-decay-1.jpg", "/em-decay-2.jpg"]),
        videos: paths(&["/Decay.mp4"]),
        audios: decay_audio_flat(),
    }))
    .media_groups(MediaGroups {
        images: vec![group("装置 Installation", &["/em-decay-1.jpg", "/em-decay-2.jpg"])],
        videos: vec![group("演示 Demos", &["/Decay.mp4"])],
        audios: vec![group("演示 Demo V1", &DECAY_AUDIO_V1), group("演示 Demo V2", &DECAY_AUDIO_V2)],
    })
    .media_items(vec![
        item(Image, Hero, "/electromagnetic-decay/hero/hero_01.jpg", Some("频谱视角")),
        item(Image, Hero, "/electromagnetic-decay/hero/hero_02.jpg", Some("频谱视角 02")),
        item(Video, Experience, "/electromagnetic-decay/experience/experience_01.mp4", Some("体验片段")),
        item(Video, Experience, "/electromagnetic-decay/experience/experience_02.mp4", Some("体验片段 02")),
        item(Image, Experience, "/electromagnetic-decay/experience/experience_03.jpg", Some("体验静帧")),
        item(Audio, Doc, "/electromagnetic-decay/docs/doc_01.wav", Some("文档音频")),
        item(Image, Doc, "/electromagnetic-decay/docs/doc_01.jpg", None),
        item(Image, Doc, "/electromagnetic-decay/docs/doc_02.jpg", None),
        item(Image, System, "/electromagnetic-decay/system/system_diagram_01.png", Some("系统示意")),
        item(Image, System, "/electromagnetic-decay/system/system_diagram_02.png", Some("系统示意 02")),
        item(Image, Concept, "/electromagnetic-decay/concept/concept_sketch_01.jpg", Some("概念草图")),
        item(Image, Concept, "/electromagnetic-decay/concept/concept_sketch_02.jpg", Some("概念草图 02")),
        item(Image, Process, "/electromagnetic-decay/process/process_setup_01.jpg", Some("过程照片")),
        item(Image, Process, "/electromagnetic-decay/process/process_setup_02.jpg", Some("过程照片 02")),
    ])
    .updates(&[
        ("v0.1", "原型阶段 — 使用 sounddevice 捕获麦克风并回放；初步集成 rtlsdr，实现 SDR 采样与 FM 解调；仅命令行运行，交互性低"),
        ("v0.3", "FX 初版 — 加入低通滤波 + 颤音 + 粉红噪声效果链；支持三种模式：CLEAN / FX / FX+FM；热键：1/2/3 切换模式；q 退出"),
        ("v0.5", "多轨录音 — 新增录音功能：r 开始/停止；自动保存 clean/fx/fxfm 三轨 WAV 文件；文件命名加入时间戳 + tag"),
        ("v0.7", "可调腐烂感 — 热键扩展：调节混合度、FM 覆盖、噪声量、低通上下限、颤音速率/深度；支持调节 SDR 频率/增益；引入 RSSI 映射窗口，增强动态感"),
        ("v1.0", "稳定版 — 完整热键系统 + 状态打印；修复 stdin 卡死问题，退出自动恢复终端；增强错误处理，设备不可用时优雅退出"),
        ("v1.2", "应用化 — 新增 run.sh：自动识别声卡、SDR；新增 launch.sh + install.sh：支持桌面双击启动；统一录音目录 ~/captures"),
        ("v1.3", "优化 — 录音结束/退出时自动保存残余数据；精简运行日志，优化错误输出；PortAudio 格式错误自动 fallback"),
    ])
    .updates_txt("/updates/electromagnetic-decay.txt")
    .brief("Electromagnetic Decay");

    let dys_utopia = Project::new(
        "dys-utopia",
        "Dys/Utopia",
        Status::Completed,
        "以粒子/融化/镜像人头的机制，视觉化‘思绪万千’与‘虚无遁形’。——【补充：技术栈、交互逻辑、视频】",
    )
    .tags(&["反刍思维", "感知", "生成视觉"])
    .bg("/bg-dys-utopia.jpg", "50% 40%", Some("cover"))
    .media(MediaSource::Collections(MediaCollections {
        videos: paths(&["/dys-utopia.mp4"]),
        ..Default::default()
    }))
    .media_groups(MediaGroups {
        videos: vec![group("最终稿 Final", &["/dys-utopia.mp4"])],
        ..Default::default()
    })
    .doc_pdf("/Dys_Utopia_Report.pdf")
    .media_items(standard_shoot(
        "dys-utopia",
        [
            "装置视角",
            "装置细节",
            "体验片段",
            "体验静帧",
            "系统示意",
            "系统示意 02",
            "概念草图",
            "概念草图 02",
            "过程照片",
            "过程照片 02",
            "体验静帧 03",
            "体验片段 02",
        ],
    ))
    .updates(&[
        ("2025-05-03", "展映并收集观众对交互节奏的反馈。"),
        ("2025-04-02", "项目完结并归档。"),
    ])
    .brief("Dys/Utopia");

    let bloom_system = Project::new(
        "bloom-system",
        "Bloom System",
        Status::Planning,
        "以影像、声音与文字叙事组织‘地理—记忆—身份’三角；探索民族/地域文化的当代再叙事。——【补充：田野素材与计划】",
    )
    .tags(&["身体数据", "噪声系统", "图像扰动"])
    .bg("/bg-roots.jpg", "center", None)
    .media(MediaSource::Collections(MediaCollections::default()))
    .doc_txt("/docs/roots-and-lands.md")
    .overview_txt("/docs/roots-and-lands-overview.txt")
    .media_items(standard_shoot(
        "bloom-system",
        [
            "田野照片",
            "田野照片 02",
            "体验片段",
            "体验静帧",
            "系统示意",
            "系统示意 02",
            "概念草图",
            "概念草图 02",
            "过程照片",
            "过程照片 02",
            "体验静帧 03",
            "体验片段 02",
        ],
    ))
    .updates(&[("2025-09-01", "采集家乡田野照片与环境声。")])
    .brief("Bloom System");

    vec![
        Theme::new(
            ThemeId::Tian,
            "科技",
            "技术统治与技术存在论对当代年轻人认知的影响；信息过载与控制带来的压迫感与虚无主义基调。",
            vec![fitting_reality, electromagnetic_decay],
            &[
                "Heidegger – The Question Concerning Technology",
                "Ellul – The Technological Society",
                "Simondon – On the Mode of Existence of Technical Objects",
            ],
        ),
        Theme::new(
            ThemeId::Ren,
            "反刍",
            "作为高敏感个体在反刍思维中的困境；多线思绪与自我坠落之间的张力。",
            vec![dys_utopia],
            &[
                "Sartre – Being and Nothingness (选读)",
                "Kernis – Self-Esteem Stability Model (关联自我评价与不稳定性)",
            ],
        ),
        Theme::new(
            ThemeId::Di,
            "连接",
            "探讨主观体验如何以数据的形式进入系统，并在反馈循环中转化为新的视觉与情绪模式。",
            vec![bloom_system],
            &[
                "Yi-Fu Tuan – Space and Place",
                "Pauline Boss – Ambiguous Loss (与‘离散/缺席’的文化维度相连)",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_path_normalizes_titles() {
        assert_eq!(brief_path("Fitting Reality"), "/brief/Fitting_Reality.txt");
        assert_eq!(brief_path("Dys/Utopia"), "/brief/Dys_Utopia.txt");
        assert_eq!(brief_path("a - b"), "/brief/a___b.txt");
    }

    #[test]
    fn builtin_content_is_parallel_across_languages() {
        let store = builtin_content();
        assert_eq!(store.en.len(), 3);
        assert_eq!(store.zh.len(), 3);
        for (en, zh) in store.en.iter().zip(store.zh.iter()) {
            assert_eq!(en.id, zh.id);
            let en_slugs: Vec<_> = en.projects.iter().map(|p| p.slug.as_str()).collect();
            let zh_slugs: Vec<_> = zh.projects.iter().map(|p| p.slug.as_str()).collect();
            assert_eq!(en_slugs, zh_slugs);
        }
    }

    #[test]
    fn find_project_scans_all_themes() {
        let store = builtin_content();
        let hit = store.find_project(Lang::En, "bloom-system").unwrap();
        assert_eq!(hit.status, Status::Planning);
        assert!(store.find_project(Lang::En, "missing").is_none());
    }

    #[test]
    fn typed_items_prefer_the_media_field_item_shape() {
        let flat = Project::new("p", "P", Status::Planning, "s").media(MediaSource::Items(vec![
            MediaItemSpec {
                media_type: None,
                role: None,
                src: "/p/hero/hero_01.jpg".into(),
                title: None,
                description: None,
            },
        ]));
        assert_eq!(flat.typed_media_items().len(), 1);

        let store = builtin_content();
        let decay = store.find_project(Lang::En, "electromagnetic-decay").unwrap();
        // media is the collections shape there, so the dedicated list wins
        assert_eq!(decay.typed_media_items().len(), 14);
    }

    #[test]
    fn project_serializes_with_camel_case_keys() {
        let store = builtin_content();
        let decay = store.find_project(Lang::En, "electromagnetic-decay").unwrap();
        let json = serde_json::to_value(decay).unwrap();
        assert!(json.get("updatesTxt").is_some());
        assert!(json.get("briefTxt").is_some());
        assert_eq!(json["status"], "in-progress");
    }
}
