//! Bundled verse corpus.
//!
//! Columns: Korean (with chapter tag), Japanese, romanization, commentary.
//! Order here is the canonical browse order.

pub(super) const CORPUS: &[(&str, &str, &str, &str)] = &[
    (
        "1-1 아침 햇살에 마음을 맑게 하라",
        "朝の光に 心を澄ませ",
        "asa no hikari ni / kokoro o sumase",
        "하루의 시작을 고요한 마음으로 맞이하라는 가르침이다.",
    ),
    (
        "1-2 고요한 물은 하늘을 비춘다",
        "静かな水は 空を映す",
        "shizuka na mizu wa / sora o utsusu",
        "마음이 잔잔해야 참된 모습이 비친다.",
    ),
    (
        "1-3 작은 씨앗도 언젠가 열매를 맺는다",
        "小さき種も やがて実る",
        "chiisaki tane mo / yagate minoru",
        "",
    ),
    (
        "2-1 길을 걸으면 벗을 만난다",
        "道を歩めば 友に会う",
        "michi o ayumeba / tomo ni au",
        "함께 걷는 이의 소중함을 노래한다.",
    ),
    (
        "2-2 손을 맞잡으면 무거운 짐도 가볍다",
        "手を取り合えば 重荷も軽し",
        "te o toriaeba / omoni mo karushi",
        "서로 돕는 삶이 곧 기쁨의 삶이다.",
    ),
    (
        "3-1 은혜의 비에 감사하라",
        "恵みの雨に 感謝せよ",
        "megumi no ame ni / kansha seyo",
        " ",
    ),
    (
        "3-2 하늘과 땅 사이에 사람은 산다",
        "天と地の間に 人は生きる",
        "ten to chi no aida ni / hito wa ikiru",
        "사람은 자연의 품 안에서 살아간다.",
    ),
    (
        "4-1 욕심을 버리면 마음이 넓어진다",
        "欲を捨てれば 心は広し",
        "yoku o sutereba / kokoro wa hiroshi",
        "욕심을 마음에 쌓이는 먼지에 비유한다.",
    ),
    (
        "4-2 먼지를 털고 맑은 마음으로",
        "埃を払い 澄んだ心で",
        "hokori o harai / sunda kokoro de",
        "",
    ),
    (
        "5-1 말은 씨앗이니 부드럽게 뿌려라",
        "言葉は種 優しく蒔け",
        "kotoba wa tane / yasashiku make",
        "말 한마디가 남의 마음에 뿌리를 내린다.",
    ),
    (
        "5-2 웃음이 있는 집에 복이 온다",
        "笑顔の家に 福来たる",
        "egao no ie ni / fuku kitaru",
        "",
    ),
    (
        "6-1 산도 바다도 같은 은혜",
        "山も海も 同じ恵み",
        "yama mo umi mo / onaji megumi",
        "",
    ),
    (
        "7-1 일하는 손은 기쁨의 손",
        "働く手は 喜びの手",
        "hataraku te wa / yorokobi no te",
        "남을 편하게 하는 것이 참된 일이다.",
    ),
    (
        "8-1 밤이 밝으면 길이 보인다",
        "夜が明ければ 道は見える",
        "yo ga akereba / michi wa mieru",
        "",
    ),
    (
        "9-1 부모를 생각하는 마음은 보배",
        "親を思う 心は宝",
        "oya o omou / kokoro wa takara",
        "",
    ),
    (
        "10-1 열 사람의 마음을 하나로 모아",
        "十の心を 一つに合わせ",
        "tō no kokoro o / hitotsu ni awase",
        "화합의 가르침이다.",
    ),
    (
        "10-2 함께 부르고 함께 춤춘다",
        "共に唱えて 共に踊る",
        "tomo ni tonaete / tomo ni odoru",
        "",
    ),
    (
        "11-1 흙을 나르면 땅이 단단해진다",
        "土を運べば 地は固まる",
        "tsuchi o hakobeba / chi wa katamaru",
        "",
    ),
    (
        "12-1 목수의 솜씨는 마음에서 나온다",
        "大工の技は 心から",
        "daiku no waza wa / kokoro kara",
        "",
    ),
    (
        "13-1 꽃은 져도 뿌리는 남는다",
        "花は散れども 根は残る",
        "hana wa chiredomo / ne wa nokoru",
        "",
    ),
    (
        "14-1 서두르지도 쉬지도 말고 걸어가라",
        "急がず休まず 歩み続けよ",
        "isogazu yasumazu / ayumi tsuzukeyo",
        "꾸준함의 가르침이다.",
    ),
    (
        "15-1 달은 차고 또 기운다",
        "月は満ちて また欠ける",
        "tsuki wa michite / mata kakeru",
        "",
    ),
    (
        "16-1 다리를 놓으면 사람이 건넌다",
        "橋を架ければ 人が渡る",
        "hashi o kakereba / hito ga wataru",
        "",
    ),
    (
        "17-1 옛 가르침을 새롭게 읽는다",
        "古き教えを 新たに読む",
        "furuki oshie o / arata ni yomu",
        "",
    ),
    (
        "18-1 끝은 시작이니 바퀴는 돈다",
        "終わりは始め 輪は巡る",
        "owari wa hajime / wa wa meguru",
        "마지막 장은 다시 처음으로 돌아간다.",
    ),
];
