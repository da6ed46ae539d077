use super::{FortuneExtras, LuckyColor, RandomSource, Recommendation, Warning};
use crate::domain::render::format_date_long;
use chrono::{DateTime, Utc};
use std::sync::OnceLock;

const ZODIAC_SIGNS: [&str; 12] = [
    "양자리", "황소자리", "쌍둥이자리", "게자리", "사자자리", "처녀자리",
    "천칭자리", "전갈자리", "사수자리", "염소자리", "물병자리", "물고기자리",
];

const ANIMAL_SIGNS: [&str; 12] = [
    "쥐띠", "소띠", "호랑이띠", "토끼띠", "용띠", "뱀띠",
    "말띠", "양띠", "원숭이띠", "닭띠", "개띠", "돼지띠",
];

const LUCKY_TIMES: [&str; 6] = [
    "오전 7시-9시",
    "오전 10시-12시",
    "오후 1시-3시",
    "오후 4시-6시",
    "저녁 7시-9시",
    "저녁 10시-12시",
];

const WARNINGS: [(&str, &str); 6] = [
    ("🚗", "외출 시 교통안전에 주의하세요"),
    ("💰", "충동구매는 자제하시고 계획적인 소비를 하세요"),
    ("😤", "감정적인 대화는 피하고 이성적으로 대처하세요"),
    ("🍔", "과식을 피하고 규칙적인 식사를 하세요"),
    ("📱", "중요한 약속이나 일정을 다시 한번 확인하세요"),
    ("💤", "과로를 피하고 충분한 휴식을 취하세요"),
];

const RECOMMENDATIONS: [(&str, &str, &str); 6] = [
    ("🚶", "가벼운 산책", "30분 정도의 산책이 건강에 좋습니다"),
    ("☕", "여유로운 티타임", "좋아하는 차 한 잔의 여유를 즐기세요"),
    ("📞", "소중한 사람에게 연락", "오랜만에 연락이 닿지 않은 분께 안부 전화를"),
    ("📚", "독서", "좋은 책이 마음의 양식이 됩니다"),
    ("🧘", "명상/요가", "10분간의 명상으로 마음의 평화를"),
    ("🎵", "음악 감상", "좋아하는 음악을 들으며 힐링하세요"),
];

const QUOTES: [&str; 6] = [
    "오늘 하루도 최선을 다하는 당신이 아름답습니다",
    "작은 행복이 모여 큰 기쁨이 됩니다",
    "긍정적인 마음이 긍정적인 하루를 만듭니다",
    "오늘을 살아있음에 감사하세요",
    "천천히, 그러나 꾸준히 나아가세요",
    "당신의 미소가 누군가에게 행복이 됩니다",
];

fn color_set(sign: &str) -> Vec<LuckyColor> {
    let pairs: &[(&str, &str)] = match sign {
        "양자리" => &[("빨강", "#FF6B6B"), ("주황", "#FFA94D")],
        "황소자리" => &[("초록", "#51CF66"), ("갈색", "#A0522D")],
        "쌍둥이자리" => &[("노랑", "#FFD43B"), ("하늘색", "#74C0FC")],
        "게자리" => &[("은색", "#C0C0C0"), ("흰색", "#F8F9FA")],
        "사자자리" => &[("금색", "#FFD700"), ("주황", "#FF922B")],
        "처녀자리" => &[("베이지", "#F4E4C1"), ("회색", "#ADB5BD")],
        "천칭자리" => &[("분홍", "#FFB3BA"), ("청록", "#4DABF7")],
        "전갈자리" => &[("검정", "#2C2C2C"), ("진홍", "#C92A2A")],
        "사수자리" => &[("보라", "#9775FA"), ("파랑", "#4C6EF5")],
        "염소자리" => &[("회색", "#868E96"), ("갈색", "#8B4513")],
        "물병자리" => &[("청록", "#20C997"), ("전기파랑", "#339AF0")],
        "물고기자리" => &[("연보라", "#D0BFFF"), ("바다색", "#66D9E8")],
        // animal signs share the default set
        _ => &[("빨강", "#FF6B6B"), ("주황", "#FFA94D")],
    };
    pairs
        .iter()
        .map(|(name, code)| LuckyColor {
            name: (*name).to_string(),
            code: (*code).to_string(),
        })
        .collect()
}

fn date_token_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"\d{4}년\s*\d{1,2}월\s*\d{1,2}일").expect("valid regex")
    })
}

pub struct FortuneService;

impl FortuneService {
    /// Extract the zodiac or animal sign from a horoscope title.
    pub fn extract_sign(title: &str) -> &'static str {
        ZODIAC_SIGNS
            .iter()
            .chain(ANIMAL_SIGNS.iter())
            .find(|sign| title.contains(*sign))
            .copied()
            .unwrap_or("양자리")
    }

    /// Horoscope copy embeds the date it was written for; rewrite every date
    /// token to `today` so yesterday's text reads as today's.
    pub fn substitute_date(content: &str, today: &DateTime<Utc>) -> String {
        date_token_re()
            .replace_all(content, format_date_long(today))
            .into_owned()
    }

    /// Generate the decorative extras for a horoscope view.
    pub fn decorate(title: &str, rng: &mut dyn RandomSource) -> FortuneExtras {
        let sign = Self::extract_sign(title);

        let mut lucky_numbers: Vec<u8> = Vec::with_capacity(3);
        while lucky_numbers.len() < 3 {
            let number = (rng.pick(45) + 1) as u8;
            if !lucky_numbers.contains(&number) {
                lucky_numbers.push(number);
            }
        }
        lucky_numbers.sort_unstable();

        let others: Vec<&str> = ZODIAC_SIGNS
            .iter()
            .copied()
            .filter(|other| *other != sign)
            .collect();
        let matches = pick_distinct(&others, 5, rng);

        FortuneExtras {
            sign: sign.to_string(),
            lucky_numbers,
            lucky_colors: color_set(sign),
            lucky_time: LUCKY_TIMES[rng.pick(LUCKY_TIMES.len())].to_string(),
            best_match: matches[..2].iter().map(|s| s.to_string()).collect(),
            good_match: matches[2..].iter().map(|s| s.to_string()).collect(),
            warnings: pick_distinct(&WARNINGS, 3, rng)
                .into_iter()
                .map(|(icon, text)| Warning {
                    icon: icon.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            recommendations: pick_distinct(&RECOMMENDATIONS, 4, rng)
                .into_iter()
                .map(|(icon, title, desc)| Recommendation {
                    icon: icon.to_string(),
                    title: title.to_string(),
                    desc: desc.to_string(),
                })
                .collect(),
            quote: QUOTES[rng.pick(QUOTES.len())].to_string(),
            accuracy_percent: (85 + rng.pick(10)) as u8,
            viewer_count: (15000 + rng.pick(5000)) as u32,
        }
    }
}

/// Take `count` distinct entries from `pool` in random order.
fn pick_distinct<T: Copy>(pool: &[T], count: usize, rng: &mut dyn RandomSource) -> Vec<T> {
    let mut remaining: Vec<T> = pool.to_vec();
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !remaining.is_empty() {
        picked.push(remaining.swap_remove(rng.pick(remaining.len())));
    }
    picked
}
