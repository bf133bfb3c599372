//! Static content pools for the local synthesis engine.
//!
//! One versioned data asset, compiled in, read-only for the whole process.
//! Pool size is a data concern only; the selection logic never branches on
//! it. Everything here is display text, strictly positive in tone.

pub struct TarotCard {
    pub name: &'static str,
    pub meaning: &'static str,
    pub advice: &'static str,
}

/// 22 major arcana, positive readings only.
pub const TAROT: &[TarotCard] = &[
    TarotCard { name: "愚者", meaning: "无限可能的新开始", advice: "带着好奇心轻装出发吧！" },
    TarotCard { name: "魔术师", meaning: "心想事成的创造力", advice: "你手里已经握着所有需要的工具。" },
    TarotCard { name: "女祭司", meaning: "直觉正在为你导航", advice: "安静下来，听听内心的声音。" },
    TarotCard { name: "女皇", meaning: "丰盛与滋养的能量", advice: "好好照顾自己，世界会回馈你温柔。" },
    TarotCard { name: "皇帝", meaning: "稳稳掌舵的力量", advice: "相信你的判断，大胆做决定。" },
    TarotCard { name: "教皇", meaning: "贵人指引的智慧", advice: "向你敬佩的人请教，会有惊喜。" },
    TarotCard { name: "恋人", meaning: "心意相通的美好连接", advice: "跟随心的选择，它不会骗你。" },
    TarotCard { name: "战车", meaning: "一往无前的冲劲", advice: "目标已经锁定，放心踩油门。" },
    TarotCard { name: "力量", meaning: "温柔而坚定的内在力量", advice: "温柔也是一种强大，保持就好。" },
    TarotCard { name: "隐者", meaning: "沉淀后的清晰", advice: "给自己一点独处时间，答案会浮现。" },
    TarotCard { name: "命运之轮", meaning: "好运正在转向你", advice: "顺势而为，机会来了就接住。" },
    TarotCard { name: "正义", meaning: "水到渠成的公正回报", advice: "你的付出都被记着呢。" },
    TarotCard { name: "倒吊人", meaning: "换个角度的豁然开朗", advice: "慢下来反而会更快。" },
    TarotCard { name: "节制", meaning: "恰到好处的平衡", advice: "今天适合把生活调成舒服的节奏。" },
    TarotCard { name: "星星", meaning: "希望之光稳稳照耀", advice: "许个愿吧，宇宙在听。" },
    TarotCard { name: "月亮", meaning: "丰富细腻的感受力", advice: "情绪是你的天赋，不是负担。" },
    TarotCard { name: "太阳", meaning: "纯粹的快乐与成功", advice: "大胆去展示你自己吧！" },
    TarotCard { name: "审判", meaning: "焕然一新的觉醒", advice: "过去的功课已经修完，向前看。" },
    TarotCard { name: "世界", meaning: "圆满达成的喜悦", advice: "庆祝一下吧，你值得。" },
    TarotCard { name: "正位权杖", meaning: "热情点燃的行动力", advice: "那个想了很久的计划，今天启动。" },
    TarotCard { name: "正位圣杯", meaning: "情感满溢的幸福", advice: "对在乎的人说句心里话。" },
    TarotCard { name: "正位星币", meaning: "踏实积累的小确幸", advice: "留意身边的小礼物，它们在发光。" },
];

pub struct LunarMansion {
    pub name: &'static str,
    pub guidance: &'static str,
}

/// The 28 lunar mansions, used as the "constellation" facet.
pub const LUNAR_MANSIONS: &[LunarMansion] = &[
    LunarMansion { name: "角宿", guidance: "万物生发，今天适合开启新篇章。" },
    LunarMansion { name: "亢宿", guidance: "昂首向前，你的气势无人能挡。" },
    LunarMansion { name: "氐宿", guidance: "根基稳固，安心把计划铺开。" },
    LunarMansion { name: "房宿", guidance: "家一般的温暖正在向你聚拢。" },
    LunarMansion { name: "心宿", guidance: "真心会被看见，勇敢表达吧。" },
    LunarMansion { name: "尾宿", guidance: "善始善终，收尾的事会格外顺。" },
    LunarMansion { name: "箕宿", guidance: "好风凭借力，顺势就能起飞。" },
    LunarMansion { name: "斗宿", guidance: "志向如北斗，方向感满分的一天。" },
    LunarMansion { name: "牛宿", guidance: "勤恳耕耘的人今天有加倍回报。" },
    LunarMansion { name: "女宿", guidance: "细腻的心思会织出美好的缘分。" },
    LunarMansion { name: "虚宿", guidance: "留白也是风景，放空会带来灵感。" },
    LunarMansion { name: "危宿", guidance: "高处视野极好，大胆登高望远。" },
    LunarMansion { name: "室宿", guidance: "布置好小天地，好运自然来敲门。" },
    LunarMansion { name: "壁宿", guidance: "文思泉涌，适合书写与表达。" },
    LunarMansion { name: "奎宿", guidance: "文曲星照耀，学习效率翻倍。" },
    LunarMansion { name: "娄宿", guidance: "聚拢人心，你是今天的团宠。" },
    LunarMansion { name: "胃宿", guidance: "好胃口配好心情，美食运极佳。" },
    LunarMansion { name: "昴宿", guidance: "群星簇拥，你是人群中的亮点。" },
    LunarMansion { name: "毕宿", guidance: "雨润万物，小小的坚持会开花。" },
    LunarMansion { name: "觜宿", guidance: "妙语连珠，今天的你特别会说话。" },
    LunarMansion { name: "参宿", guidance: "猎户之光护航，行动力满格。" },
    LunarMansion { name: "井宿", guidance: "源头活水，灵感取之不尽。" },
    LunarMansion { name: "鬼宿", guidance: "直觉敏锐，第六感今天很准。" },
    LunarMansion { name: "柳宿", guidance: "柳暗花明，转角就有小惊喜。" },
    LunarMansion { name: "星宿", guidance: "星光为你聚焦，尽情闪耀吧。" },
    LunarMansion { name: "张宿", guidance: "张弛有度，享受从容的节奏。" },
    LunarMansion { name: "翼宿", guidance: "羽翼渐丰，是时候飞得更高了。" },
    LunarMansion { name: "轸宿", guidance: "车轮滚滚向前，出行运满分。" },
];

pub struct FoodEntry {
    pub food: &'static str,
    pub reason: &'static str,
}

pub const FOODS: &[FoodEntry] = &[
    FoodEntry { food: "热燕麦粥", reason: "温暖的谷物香气能抚平内心的褶皱。" },
    FoodEntry { food: "草莓蛋糕", reason: "甜甜的奶油会给今天加一层粉色滤镜。" },
    FoodEntry { food: "热可可", reason: "捧在手心的温度就是小型幸福发电站。" },
    FoodEntry { food: "小笼包", reason: "一口爆汁的惊喜，和你今天的运气一样。" },
    FoodEntry { food: "桂花酒酿圆子", reason: "团团圆圆的甜汤最旺人缘。" },
    FoodEntry { food: "牛油果吐司", reason: "绿色能量为你的行动力充电。" },
    FoodEntry { food: "柠檬蜂蜜水", reason: "酸酸甜甜，唤醒清爽的好状态。" },
    FoodEntry { food: "番茄鸡蛋面", reason: "家常的味道是最可靠的护身符。" },
    FoodEntry { food: "烤红薯", reason: "捂热手心也捂热运势。" },
    FoodEntry { food: "抹茶拿铁", reason: "微苦回甘，像惊喜来临前的铺垫。" },
    FoodEntry { food: "水果酸奶碗", reason: "五彩的维生素就是五彩的好运。" },
    FoodEntry { food: "糖炒栗子", reason: "剥开一颗是一颗的踏实甜。" },
];

pub struct ActivityEntry {
    pub action: &'static str,
    pub benefit: &'static str,
}

/// Simple, free, non-consumerist actions only.
pub const ACTIVITIES: &[ActivityEntry] = &[
    ActivityEntry { action: "抬头看云", benefit: "在云朵的变幻中感受自由和轻松。" },
    ActivityEntry { action: "给绿植浇水", benefit: "照顾一个小生命，被治愈的是自己。" },
    ActivityEntry { action: "整理桌面一角", benefit: "清爽的空间会腾出好运的位置。" },
    ActivityEntry { action: "散步十分钟", benefit: "脚步放慢，灵感就能追上你。" },
    ActivityEntry { action: "听一首老歌", benefit: "熟悉的旋律自带时光滤镜。" },
    ActivityEntry { action: "深呼吸三次", benefit: "给紧绷的神经放个微型假期。" },
    ActivityEntry { action: "写下三件开心小事", benefit: "被记录的快乐会加倍保值。" },
    ActivityEntry { action: "对镜子笑一下", benefit: "最先被你治愈的人应该是自己。" },
    ActivityEntry { action: "看一次日落", benefit: "把一天的疲惫交给晚霞带走。" },
    ActivityEntry { action: "给老朋友发句问候", benefit: "一句话就能点亮两个人的今天。" },
    ActivityEntry { action: "伸个大大的懒腰", benefit: "身体舒展开，运气也会跟着舒展。" },
    ActivityEntry { action: "摸摸毛茸茸的东西", benefit: "柔软的触感是即时生效的快乐。" },
];

pub struct MovieEntry {
    pub title: &'static str,
    pub reason: &'static str,
}

pub const MOVIES: &[MovieEntry] = &[
    MovieEntry { title: "普罗旺斯的夏天", reason: "感受阳光与亲情的治愈力量。" },
    MovieEntry { title: "龙猫", reason: "在森林的怀抱里找回童年的安全感。" },
    MovieEntry { title: "天使爱美丽", reason: "学会收集生活里的微小魔法。" },
    MovieEntry { title: "海蒂和爷爷", reason: "阿尔卑斯的风会吹散所有烦恼。" },
    MovieEntry { title: "心灵奇旅", reason: "平凡日子本身就是值得活的火花。" },
    MovieEntry { title: "菊次郎的夏天", reason: "笨拙的温柔最打动人心。" },
    MovieEntry { title: "帕丁顿熊", reason: "善良的小熊教你温柔地对待世界。" },
    MovieEntry { title: "飞屋环游记", reason: "冒险精神永远不分年龄。" },
    MovieEntry { title: "小森林", reason: "四季流转的炊烟是最好的慢生活教程。" },
    MovieEntry { title: "歌声的翅膀", reason: "让旋律带着心情飞一会儿。" },
    MovieEntry { title: "料理鼠王", reason: "相信自己，人人都能创造美味奇迹。" },
    MovieEntry { title: "万物理论", reason: "爱与求知能点亮最深的夜空。" },
];

pub struct MusicEntry {
    pub title: &'static str,
    pub artist: &'static str,
    pub vibe: &'static str,
}

pub const MUSIC: &[MusicEntry] = &[
    MusicEntry { title: "Happy", artist: "Pharrell Williams", vibe: "把快乐因子注入每一个细胞。" },
    MusicEntry { title: "晴天", artist: "周杰伦", vibe: "回忆里的晴空为今天续航。" },
    MusicEntry { title: "Here Comes the Sun", artist: "The Beatles", vibe: "太阳出来了，一切都会好的。" },
    MusicEntry { title: "小幸运", artist: "田馥甄", vibe: "感谢生命里每一次恰到好处的相遇。" },
    MusicEntry { title: "What a Wonderful World", artist: "Louis Armstrong", vibe: "用温柔的目光重新打量世界。" },
    MusicEntry { title: "平凡之路", artist: "朴树", vibe: "走过的每一步都算数。" },
    MusicEntry { title: "Lemon Tree", artist: "Fools Garden", vibe: "轻快的柠檬味心情汽水。" },
    MusicEntry { title: "夜空中最亮的星", artist: "逃跑计划", vibe: "抬头就能找到属于你的那颗星。" },
    MusicEntry { title: "Top of the World", artist: "Carpenters", vibe: "站上世界之巅的轻盈好心情。" },
    MusicEntry { title: "风吹麦浪", artist: "李健", vibe: "金色田野的风替你理顺思绪。" },
    MusicEntry { title: "Count on Me", artist: "Bruno Mars", vibe: "友谊是随身携带的充电宝。" },
    MusicEntry { title: "稻香", artist: "周杰伦", vibe: "回到最初的美好，功不唐捐。" },
];

pub const COLORS: &[&str] = &[
    "金色", "樱花粉", "天空蓝", "抹茶绿", "奶油白", "落日橙",
    "薰衣草紫", "珊瑚红", "柠檬黄", "薄荷青", "星空蓝", "蜜桃色",
];

pub const OBJECTS: &[&str] = &[
    "向日葵", "四叶草书签", "小熊挂件", "贝壳风铃", "手写便签", "圆圆的橘子",
    "毛绒围巾", "透明水杯", "小盆多肉", "旧照片", "蓝色圆珠笔", "星星发夹",
];

pub struct AnimalEntry {
    pub animal: &'static str,
    pub trait_desc: &'static str,
    pub reason: &'static str,
}

pub const ANIMALS: &[AnimalEntry] = &[
    AnimalEntry { animal: "水豚", trait_desc: "情绪稳定", reason: "今天的你拥有让人安心的治愈磁场。" },
    AnimalEntry { animal: "柯基", trait_desc: "短腿快乐", reason: "你们都用小步伐跑出大快乐。" },
    AnimalEntry { animal: "海獭", trait_desc: "牵手睡觉", reason: "你和它一样懂得抓紧身边的温暖。" },
    AnimalEntry { animal: "大熊猫", trait_desc: "呆萌治愈", reason: "存在本身就是大家的快乐源泉。" },
    AnimalEntry { animal: "橘猫", trait_desc: "慵懒智慧", reason: "松弛感满分，好运偏爱不紧绷的人。" },
    AnimalEntry { animal: "羊驼", trait_desc: "自带卷发", reason: "你们都有把日子过出萌感的天赋。" },
    AnimalEntry { animal: "企鹅", trait_desc: "摇摆前进", reason: "哪怕步伐摇晃，方向始终坚定。" },
    AnimalEntry { animal: "小刺猬", trait_desc: "外刚内软", reason: "懂你的人自然能抱到柔软的你。" },
    AnimalEntry { animal: "海豚", trait_desc: "微笑曲线", reason: "你的笑容和它一样有感染力。" },
    AnimalEntry { animal: "布偶猫", trait_desc: "温柔粘人", reason: "今天的你值得被好好抱抱。" },
    AnimalEntry { animal: "小松鼠", trait_desc: "囤积幸福", reason: "你们都擅长把小快乐攒成大满足。" },
    AnimalEntry { animal: "考拉", trait_desc: "抱紧生活", reason: "抱紧眼前的美好，就是今天的主题。" },
];

pub struct CelebrityEntry {
    pub name: &'static str,
    pub desc: &'static str,
    pub reason: &'static str,
    pub romantic_vibe: &'static str,
}

pub const CELEBRITIES: &[CelebrityEntry] = &[
    CelebrityEntry { name: "奥黛丽·赫本", desc: "优雅的灵魂", reason: "你们都拥有一颗温暖善良的心，能发现生活细微处的美好。", romantic_vibe: "灵魂共鸣" },
    CelebrityEntry { name: "小王子", desc: "B612星球的旅人", reason: "你们都保持着纯真的童心，能看懂大人看不懂的事情。", romantic_vibe: "纯真守护" },
    CelebrityEntry { name: "周杰伦", desc: "音乐才子", reason: "你们的感性频率一致，都能在旋律中找到最深的情感。", romantic_vibe: "浪漫听众" },
    CelebrityEntry { name: "宫崎骏", desc: "造梦师", reason: "你们都相信魔法的存在，愿意温柔地对待这个世界。", romantic_vibe: "梦想伙伴" },
    CelebrityEntry { name: "林黛玉", desc: "世外仙姝", reason: "你们拥有同样细腻的感知力，能读懂风的语言。", romantic_vibe: "知己" },
    CelebrityEntry { name: "苏东坡", desc: "豁达的美食家", reason: "你们都能把平凡日子过成诗，苦中也要吃出甜。", romantic_vibe: "人间清醒搭子" },
    CelebrityEntry { name: "爱因斯坦", desc: "好奇的智者", reason: "你们对世界保有同款好奇心，聊天永远不会冷场。", romantic_vibe: "思想共振" },
    CelebrityEntry { name: "玛丽莲·梦露", desc: "明亮的星", reason: "你们都懂得用笑容点亮周围的人。", romantic_vibe: "魅力磁场" },
    CelebrityEntry { name: "李白", desc: "浪漫的诗仙", reason: "你们骨子里都住着一个想仗剑走天涯的浪漫主义者。", romantic_vibe: "酒逢知己" },
    CelebrityEntry { name: "赫敏·格兰杰", desc: "聪慧的魔法师", reason: "你们都相信努力本身就是最强的魔法。", romantic_vibe: "学霸同盟" },
    CelebrityEntry { name: "邓布利多", desc: "温柔的长者", reason: "你们都明白，爱是世界上最古老也最强大的魔法。", romantic_vibe: "智慧引路人" },
    CelebrityEntry { name: "花木兰", desc: "勇敢的将军", reason: "你们都有在关键时刻挺身而出的勇气。", romantic_vibe: "并肩战友" },
];

pub const AFFIRMATIONS: &[&str] = &[
    "我值得拥有这世间所有的美好。",
    "今天的我，比昨天更接近想成为的自己。",
    "好运正在来的路上，而我已经准备好了。",
    "我的温柔是力量，不是软肋。",
    "我允许自己慢慢来，每一步都算数。",
    "宇宙会温柔接住每一个认真生活的人。",
    "我是自己故事里最棒的主角。",
    "此刻的我，正好在对的时间对的地方。",
    "我散发的光，终会照亮自己的路。",
    "小小的我，也能创造大大的快乐。",
    "我与今天的好运双向奔赴。",
    "被爱是我的日常，不是奇迹。",
];

pub struct MbtiProfile {
    pub code: &'static str,
    pub superpower: &'static str,
    pub social_vibe: &'static str,
}

pub const MBTI_PROFILES: &[MbtiProfile] = &[
    MbtiProfile { code: "INTJ", superpower: "一眼看到终局的战略脑", social_vibe: "靠谱的幕后军师" },
    MbtiProfile { code: "INTP", superpower: "把问题拆到原子级的好奇心", social_vibe: "行走的灵感百科" },
    MbtiProfile { code: "ENTJ", superpower: "把愿景变成计划的推土机", social_vibe: "让人安心跟随的队长" },
    MbtiProfile { code: "ENTP", superpower: "永不枯竭的点子喷泉", social_vibe: "聊什么都有趣的辩友" },
    MbtiProfile { code: "INFJ", superpower: "读懂言外之意的共情雷达", social_vibe: "深夜电台般的倾听者" },
    MbtiProfile { code: "INFP", superpower: "在平凡里酿出诗意的心", social_vibe: "温柔的理想主义者" },
    MbtiProfile { code: "ENFJ", superpower: "让每个人发光的魔法", social_vibe: "人群里的小太阳" },
    MbtiProfile { code: "ENFP", superpower: "感染力", social_vibe: "快乐小狗" },
    MbtiProfile { code: "ISTJ", superpower: "说到做到的可靠引擎", social_vibe: "沉默但暖心的后盾" },
    MbtiProfile { code: "ISFJ", superpower: "把细节照顾到位的守护力", social_vibe: "润物细无声的暖炉" },
    MbtiProfile { code: "ESTJ", superpower: "把混乱理成秩序的执行力", social_vibe: "值得托付的组织者" },
    MbtiProfile { code: "ESFJ", superpower: "把氛围烘托到满分的热心", social_vibe: "聚会的灵魂人物" },
    MbtiProfile { code: "ISTP", superpower: "冷静拆解一切的巧手", social_vibe: "关键时刻的救场王" },
    MbtiProfile { code: "ISFP", superpower: "捕捉美好瞬间的艺术眼", social_vibe: "安静的氛围美学家" },
    MbtiProfile { code: "ESTP", superpower: "说走就走的行动力", social_vibe: "自带烟火气的玩伴" },
    MbtiProfile { code: "ESFP", superpower: "把当下过成庆典的能量", social_vibe: "行走的快乐供应站" },
];

// The synthesizer always asks for 5 distinct celebrities.
const _: () = assert!(CELEBRITIES.len() >= 5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(TAROT.len(), 22);
        assert_eq!(LUNAR_MANSIONS.len(), 28);
        assert_eq!(MBTI_PROFILES.len(), 16);
        assert!(CELEBRITIES.len() >= 5);
        assert!(!FOODS.is_empty());
        assert!(!ACTIVITIES.is_empty());
        assert!(!MOVIES.is_empty());
        assert!(!MUSIC.is_empty());
        assert!(!COLORS.is_empty());
        assert!(!OBJECTS.is_empty());
        assert!(!ANIMALS.is_empty());
        assert!(!AFFIRMATIONS.is_empty());
    }

    #[test]
    fn test_mbti_codes_unique() {
        for i in 0..MBTI_PROFILES.len() {
            for j in (i + 1)..MBTI_PROFILES.len() {
                assert_ne!(MBTI_PROFILES[i].code, MBTI_PROFILES[j].code);
            }
        }
    }

    #[test]
    fn test_celebrity_names_unique() {
        for i in 0..CELEBRITIES.len() {
            for j in (i + 1)..CELEBRITIES.len() {
                assert_ne!(CELEBRITIES[i].name, CELEBRITIES[j].name);
            }
        }
    }
}
