//! Fixed Japanese label set used by the text report.

use crate::aspects::AspectKind;
use crate::western::sect::SectStatus;
use crate::zodiac::{Angle, Body, ChartPoint, Sect, Sign};

pub fn body_name(body: Body) -> &'static str {
    match body {
        Body::Sun => "太陽",
        Body::Moon => "月",
        Body::Mercury => "水星",
        Body::Venus => "金星",
        Body::Mars => "火星",
        Body::Jupiter => "木星",
        Body::Saturn => "土星",
        Body::Uranus => "天王星",
        Body::Neptune => "海王星",
        Body::Pluto => "冥王星",
        Body::NorthNode => "ノースノード",
    }
}

pub fn sign_name(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "牡羊座",
        Sign::Taurus => "牡牛座",
        Sign::Gemini => "双子座",
        Sign::Cancer => "蟹座",
        Sign::Leo => "獅子座",
        Sign::Virgo => "乙女座",
        Sign::Libra => "天秤座",
        Sign::Scorpio => "蠍座",
        Sign::Sagittarius => "射手座",
        Sign::Capricorn => "山羊座",
        Sign::Aquarius => "水瓶座",
        Sign::Pisces => "魚座",
    }
}

pub fn angle_name(angle: Angle) -> &'static str {
    match angle {
        Angle::Ascendant => "ASC",
        Angle::Midheaven => "MC",
    }
}

pub fn point_name(point: ChartPoint) -> &'static str {
    match point {
        ChartPoint::Body(body) => body_name(body),
        ChartPoint::Angle(angle) => angle_name(angle),
    }
}

pub fn aspect_name(kind: AspectKind) -> &'static str {
    match kind {
        AspectKind::Conjunction => "合(0度)",
        AspectKind::Sextile => "60度",
        AspectKind::Square => "90度",
        AspectKind::Trine => "120度",
        AspectKind::Opposition => "180度",
    }
}

pub fn sect_label(sect: Sect) -> &'static str {
    match sect {
        Sect::Day => "昼チャート (Day)",
        Sect::Night => "夜チャート (Night)",
    }
}

pub fn sect_status_label(status: SectStatus) -> &'static str {
    match status {
        SectStatus::InSect => "In Sect(吉)",
        SectStatus::OutOfSect => "Out of Sect(凶)",
        SectStatus::Neutral => "Neutral",
    }
}
