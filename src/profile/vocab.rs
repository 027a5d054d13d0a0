// Survey form vocabularies.
//
// These are the choices the mentee form offers and the values the mentor
// table is expected to use. The matching engine does not reject tokens outside
// these lists; they exist so the CLI can show users what to write.

pub const GENDERS: &[&str] = &["남", "여", "기타"];

pub const COMM_MODES: &[&str] = &["대면 만남", "화상채팅", "일반 채팅"];

pub const TIME_SLOTS: &[&str] = &["오전", "오후", "저녁", "밤"];

pub const DAYS: &[&str] = &["월", "화", "수", "목", "금", "토", "일"];

/// Communication styles, each with the one-line description shown on the form.
pub const STYLES: &[(&str, &str)] = &[
    ("연두부형", "조용하고 차분, 경청·공감"),
    ("분위기메이커형", "활발·주도"),
    ("효율추구형", "목표·체계"),
    ("댕댕이형", "자유롭고 즉흥"),
    ("감성 충만형", "위로·지지 지향"),
    ("냉철한 조언자형", "논리·문제 해결"),
];

pub const OCCUPATION_MAJORS: &[&str] = &[
    "경영자",
    "행정관리",
    "의학/보건",
    "법률/행정",
    "교육",
    "연구개발/ IT",
    "예술/디자인",
    "기술/기능",
    "서비스 전문",
    "일반 사무",
    "영업 원",
    "판매",
    "서비스",
    "의료/보건 서비스",
    "생산/제조",
    "건설/시설",
    "농림수산업",
    "운송/기계",
    "운송 관리",
    "청소 / 경비",
    "단순노무",
    "학생",
    "전업주부",
    "구직자 / 최근 퇴사자 / 프리랜서(임시)",
    "기타",
];

/// Interest groups as (group label, choices).
pub const INTEREST_GROUPS: &[(&str, &[&str])] = &[
    (
        "여가/취미",
        &[
            "독서",
            "음악 감상",
            "영화/드라마 감상",
            "게임",
            "운동/스포츠 관람",
            "미술·전시 감상",
            "여행",
            "요리/베이킹",
            "사진/영상 제작",
            "춤/노래",
        ],
    ),
    (
        "학문/지적 관심사",
        &[
            "인문학",
            "사회과학",
            "자연과학",
            "수학/논리 퍼즐",
            "IT/테크놀로지",
            "환경/지속가능성",
        ],
    ),
    (
        "라이프스타일",
        &[
            "패션/뷰티",
            "건강/웰빙",
            "자기계발",
            "사회참여/봉사활동",
            "재테크/투자",
            "반려동물",
        ],
    ),
    (
        "대중문화",
        &[
            "K-POP",
            "아이돌/연예인",
            "유튜브/스트리밍",
            "웹툰/웹소설",
            "스포츠 스타",
        ],
    ),
    (
        "성향",
        &[
            "혼자 보내는 시간 선호",
            "친구들과 어울리기 선호",
            "실내 활동 선호",
            "야외 활동 선호",
            "새로움 추구",
            "안정감 추구",
        ],
    ),
];

pub const PURPOSES: &[&str] = &[
    "진로 / 커리어 조언",
    "학업 / 전문지식 조언",
    "사회, 인생 경험 공유",
    "정서적 지지와 대화",
];

pub const TOPIC_PREFS: &[&str] = &[
    "진로·직업",
    "학업·전문 지식",
    "인생 경험·삶의 가치관",
    "대중문화·취미",
    "사회 문제·시사",
    "건강·웰빙",
];

/// True if `style` is one of the known style names.
pub fn is_known_style(style: &str) -> bool {
    STYLES.iter().any(|(name, _)| *name == style)
}
