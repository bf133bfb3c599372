use serde::{Deserialize, Serialize};

/// Western zodiac sun sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_zh())
    }
}

impl ZodiacSign {
    pub fn name_zh(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "白羊座",
            ZodiacSign::Taurus => "金牛座",
            ZodiacSign::Gemini => "双子座",
            ZodiacSign::Cancer => "巨蟹座",
            ZodiacSign::Leo => "狮子座",
            ZodiacSign::Virgo => "处女座",
            ZodiacSign::Libra => "天秤座",
            ZodiacSign::Scorpio => "天蝎座",
            ZodiacSign::Sagittarius => "射手座",
            ZodiacSign::Capricorn => "摩羯座",
            ZodiacSign::Aquarius => "水瓶座",
            ZodiacSign::Pisces => "双鱼座",
        }
    }

    pub fn lucky_trait(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "说干就干的行动力",
            ZodiacSign::Taurus => "稳稳的安全感",
            ZodiacSign::Gemini => "把气氛聊活的才华",
            ZodiacSign::Cancer => "温柔包容的心",
            ZodiacSign::Leo => "自带聚光灯的魅力",
            ZodiacSign::Virgo => "把一切打理妥帖的细心",
            ZodiacSign::Libra => "令人如沐春风的优雅",
            ZodiacSign::Scorpio => "一眼看透本质的洞察力",
            ZodiacSign::Sagittarius => "永远乐观的冒险精神",
            ZodiacSign::Capricorn => "默默坚持的韧性",
            ZodiacSign::Aquarius => "与众不同的奇思妙想",
            ZodiacSign::Pisces => "浪漫细腻的想象力",
        }
    }

    pub fn compliment(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "你的热情能点燃整个房间。",
            ZodiacSign::Taurus => "有你在的地方就有踏实的幸福。",
            ZodiacSign::Gemini => "和你聊天是世界上最有趣的事。",
            ZodiacSign::Cancer => "你的温柔是身边人最大的福气。",
            ZodiacSign::Leo => "你一出现，世界都亮了几分。",
            ZodiacSign::Virgo => "你认真的样子真的在发光。",
            ZodiacSign::Libra => "你总能把美好带到每个角落。",
            ZodiacSign::Scorpio => "你的深情是稀世的宝藏。",
            ZodiacSign::Sagittarius => "你的笑声就是最好的天气预报。",
            ZodiacSign::Capricorn => "你悄悄努力的样子特别帅。",
            ZodiacSign::Aquarius => "你的脑洞里住着整个宇宙。",
            ZodiacSign::Pisces => "你温柔的想象力在治愈世界。",
        }
    }
}

/// Inclusive (sign, start month, start day, end month, end day) ranges.
/// Capricorn appears twice because it straddles the year boundary; together
/// the rows cover every possible (month, day) pair.
const ZODIAC_RANGES: &[(ZodiacSign, u32, u32, u32, u32)] = &[
    (ZodiacSign::Capricorn, 1, 1, 1, 19),
    (ZodiacSign::Aquarius, 1, 20, 2, 18),
    (ZodiacSign::Pisces, 2, 19, 3, 20),
    (ZodiacSign::Aries, 3, 21, 4, 19),
    (ZodiacSign::Taurus, 4, 20, 5, 20),
    (ZodiacSign::Gemini, 5, 21, 6, 21),
    (ZodiacSign::Cancer, 6, 22, 7, 22),
    (ZodiacSign::Leo, 7, 23, 8, 22),
    (ZodiacSign::Virgo, 8, 23, 9, 22),
    (ZodiacSign::Libra, 9, 23, 10, 23),
    (ZodiacSign::Scorpio, 10, 24, 11, 22),
    (ZodiacSign::Sagittarius, 11, 23, 12, 21),
    (ZodiacSign::Capricorn, 12, 22, 12, 31),
];

/// Map a (month, day) pair to its sun sign. Total over all valid dates; a
/// syntactically broken date lands on Capricorn rather than failing, since
/// date validation belongs to the intake flow.
pub fn zodiac_for(month: u32, day: u32) -> ZodiacSign {
    for &(sign, sm, sd, em, ed) in ZODIAC_RANGES {
        let after_start = month > sm || (month == sm && day >= sd);
        let before_end = month < em || (month == em && day <= ed);
        if after_start && before_end {
            return sign;
        }
    }
    ZodiacSign::Capricorn
}

/// Chinese zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl std::fmt::Display for ChineseZodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_zh())
    }
}

impl ChineseZodiac {
    pub fn name_zh(&self) -> &'static str {
        match self {
            ChineseZodiac::Rat => "鼠",
            ChineseZodiac::Ox => "牛",
            ChineseZodiac::Tiger => "虎",
            ChineseZodiac::Rabbit => "兔",
            ChineseZodiac::Dragon => "龙",
            ChineseZodiac::Snake => "蛇",
            ChineseZodiac::Horse => "马",
            ChineseZodiac::Goat => "羊",
            ChineseZodiac::Monkey => "猴",
            ChineseZodiac::Rooster => "鸡",
            ChineseZodiac::Dog => "狗",
            ChineseZodiac::Pig => "猪",
        }
    }

    pub fn secret_strength(&self) -> &'static str {
        match self {
            ChineseZodiac::Rat => "机灵百变的应变力",
            ChineseZodiac::Ox => "厚积薄发的耐力",
            ChineseZodiac::Tiger => "敢想敢做的勇气",
            ChineseZodiac::Rabbit => "化解矛盾的温柔",
            ChineseZodiac::Dragon => "天生好运",
            ChineseZodiac::Snake => "洞悉人心的智慧",
            ChineseZodiac::Horse => "一路向前的自由魂",
            ChineseZodiac::Goat => "治愈人心的善良",
            ChineseZodiac::Monkey => "点子永远用不完",
            ChineseZodiac::Rooster => "闪闪发亮的自信",
            ChineseZodiac::Dog => "最值得托付的忠诚",
            ChineseZodiac::Pig => "知足常乐的福气",
        }
    }

    pub fn compliment(&self) -> &'static str {
        match self {
            ChineseZodiac::Rat => "再复杂的局面你也能找到出路。",
            ChineseZodiac::Ox => "你的踏实是最稀缺的超能力。",
            ChineseZodiac::Tiger => "你的气场能罩住所有人。",
            ChineseZodiac::Rabbit => "你一开口，空气都变柔软了。",
            ChineseZodiac::Dragon => "你拥有改变周围气氛的神奇力量。",
            ChineseZodiac::Snake => "你的沉静里藏着大智慧。",
            ChineseZodiac::Horse => "你奔跑的样子自带风。",
            ChineseZodiac::Goat => "靠近你的人都会被治愈。",
            ChineseZodiac::Monkey => "你的灵感永远快人一步。",
            ChineseZodiac::Rooster => "你把每一天都过得有声有色。",
            ChineseZodiac::Dog => "有你在，大家都很安心。",
            ChineseZodiac::Pig => "你的好心态就是最大的财富。",
        }
    }
}

/// Animal cycle indexed by `year % 12`, aligned so that reference years land
/// correctly: 2000 and 2024 map to Dragon, 1990 to Horse.
const CHINESE_CYCLE: [ChineseZodiac; 12] = [
    ChineseZodiac::Monkey,
    ChineseZodiac::Rooster,
    ChineseZodiac::Dog,
    ChineseZodiac::Pig,
    ChineseZodiac::Rat,
    ChineseZodiac::Ox,
    ChineseZodiac::Tiger,
    ChineseZodiac::Rabbit,
    ChineseZodiac::Dragon,
    ChineseZodiac::Snake,
    ChineseZodiac::Horse,
    ChineseZodiac::Goat,
];

/// Map a birth year to its animal. Year range validation is the caller's
/// responsibility; an out-of-range year still yields a defined animal.
pub fn chinese_zodiac_for(year: i32) -> ChineseZodiac {
    CHINESE_CYCLE[year.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(zodiac_for(1, 28), ZodiacSign::Aquarius);
        assert_eq!(zodiac_for(12, 25), ZodiacSign::Capricorn);
        assert_eq!(zodiac_for(3, 21), ZodiacSign::Aries);
        assert_eq!(zodiac_for(1, 19), ZodiacSign::Capricorn);
        assert_eq!(zodiac_for(1, 20), ZodiacSign::Aquarius);
        assert_eq!(zodiac_for(12, 22), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_zodiac_total_coverage() {
        // Every (month, day) pair resolves, including 2/29.
        for month in 1..=12u32 {
            for day in 1..=31u32 {
                let _ = zodiac_for(month, day);
            }
        }
    }

    #[test]
    fn test_chinese_zodiac_reference_years() {
        assert_eq!(chinese_zodiac_for(2000), ChineseZodiac::Dragon);
        assert_eq!(chinese_zodiac_for(2024), ChineseZodiac::Dragon);
        assert_eq!(chinese_zodiac_for(1990), ChineseZodiac::Horse);
        assert_eq!(chinese_zodiac_for(2016), ChineseZodiac::Monkey);
    }

    #[test]
    fn test_chinese_zodiac_period() {
        for year in 1900..2000 {
            assert_eq!(chinese_zodiac_for(year), chinese_zodiac_for(year + 12));
        }
    }
}
