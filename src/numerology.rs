/// Numerology life path number reduced from a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifePathNumber {
    pub number: u32,
    pub meaning: &'static str,
}

impl LifePathNumber {
    pub fn display(&self) -> String {
        self.number.to_string()
    }
}

const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn meaning_for(number: u32) -> &'static str {
    match number {
        1 => "开创者：你天生就是第一个迈出脚步的人。",
        2 => "协调者：你让身边的世界更温柔合拍。",
        3 => "表达者：你的创意和笑声会感染所有人。",
        4 => "建造者：你把梦想一砖一瓦变成现实。",
        5 => "冒险家：变化对你来说是礼物不是风浪。",
        6 => "守护者：你的爱让家一样的温暖延伸到远方。",
        7 => "探索者：你能看见别人看不见的深层答案。",
        8 => "实现者：丰盛和成就天然向你聚拢。",
        9 => "理想家：你的胸怀装得下整个世界的善意。",
        11 => "大师数11·启明者：你的直觉是照亮他人的灯。",
        22 => "大师数22·筑梦师：你能把宏大的愿景落到实处。",
        33 => "大师数33·大爱之师：你的温暖能托起所有人。",
        // The reduction can't actually land outside the mapped set;
        // defensive default only.
        _ => "神秘能量：你拥有无法被定义的独特磁场。",
    }
}

/// Sum every decimal digit in the date string, then keep digit-summing until
/// the value is a single digit or one of the master numbers 11/22/33, which
/// are never reduced further.
pub fn life_path_number(birth_date: &str) -> LifePathNumber {
    let mut sum: u32 = birth_date
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum();

    while sum > 9 && !MASTER_NUMBERS.contains(&sum) {
        sum = digit_sum(sum);
    }

    LifePathNumber {
        number: sum,
        meaning: meaning_for(sum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_terminates_in_range() {
        for date in ["1990-01-28", "2000-12-31", "1975-06-15", "2024-02-29"] {
            let lp = life_path_number(date);
            assert!(
                (1..=9).contains(&lp.number) || MASTER_NUMBERS.contains(&lp.number),
                "{date} reduced to {}",
                lp.number
            );
        }
    }

    #[test]
    fn test_known_reduction() {
        // 1+9+9+0+0+1+2+8 = 30 -> 3
        let lp = life_path_number("1990-01-28");
        assert_eq!(lp.number, 3);
    }

    #[test]
    fn test_master_number_preserved() {
        // 2000-01-08 -> 2+0+0+0+0+1+0+8 = 11, stays 11
        let lp = life_path_number("2000-01-08");
        assert_eq!(lp.number, 11);

        // 1989-09-19 -> 1+9+8+9+0+9+1+9 = 46 -> 10 -> 1
        let lp = life_path_number("1989-09-19");
        assert_eq!(lp.number, 1);
    }

    #[test]
    fn test_separators_ignored() {
        assert_eq!(life_path_number("1990-01-28"), life_path_number("19900128"));
    }

    #[test]
    fn test_every_mapped_value_has_meaning() {
        for n in (1..=9).chain(MASTER_NUMBERS) {
            assert!(!meaning_for(n).contains("神秘能量"));
        }
    }
}
