use phf::phf_map;

/// 方向/轴键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 不带方向的简写（`m-4`、`rounded`、`overflow-auto`）
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// 合并规则：`from` 中的键同时出现时可合并为 `to`
#[derive(Debug)]
pub struct CombineRule {
    pub from: &'static [Direction],
    pub to: Direction,
}

/// 简写族定义
#[derive(Debug)]
pub struct Family {
    /// 族名（如 "margin"），也是配置中禁用族时使用的名字
    pub name: &'static str,
    /// 合并规则，按优先级排列
    pub rules: &'static [CombineRule],
}

/// 族成员：成员类名前缀所属的族及其方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub family: &'static str,
    pub direction: Direction,
}

impl Family {
    /// 查找该族某个方向对应的工具类名
    pub fn member_name(&self, direction: Direction) -> Option<&'static str> {
        MEMBERS
            .entries()
            .find(|(_, member)| member.family == self.name && member.direction == direction)
            .map(|(name, _)| *name)
    }
}

impl CombineRule {
    /// 所有输入键都存在时规则触发
    pub fn fires<V>(&self, present: &indexmap::IndexMap<Direction, V>) -> bool {
        self.from.iter().all(|d| present.contains_key(d))
    }
}

use Direction::*;

/// x + y
static AXIS_RULES: &[CombineRule] = &[CombineRule {
    from: &[X, Y],
    to: All,
}];

/// t + b → y, l + r → x, x + y → 全部
static TRBL_RULES: &[CombineRule] = &[
    CombineRule {
        from: &[Top, Bottom],
        to: Y,
    },
    CombineRule {
        from: &[Left, Right],
        to: X,
    },
    CombineRule {
        from: &[X, Y],
        to: All,
    },
];

/// 圆角：先合并共边的两个角，再合并相对的两条边
static CORNER_RULES: &[CombineRule] = &[
    CombineRule {
        from: &[TopLeft, TopRight],
        to: Top,
    },
    CombineRule {
        from: &[BottomLeft, BottomRight],
        to: Bottom,
    },
    CombineRule {
        from: &[TopLeft, BottomLeft],
        to: Left,
    },
    CombineRule {
        from: &[TopRight, BottomRight],
        to: Right,
    },
    CombineRule {
        from: &[Top, Bottom],
        to: All,
    },
    CombineRule {
        from: &[Left, Right],
        to: All,
    },
];

/// 所有支持的简写族
///
/// border 同时覆盖 border-width 和 border-color：两者前缀相同，
/// 分桶时要求值完全一致（含 `/50` 透明度），不会互相合并。
pub static FAMILIES: &[Family] = &[
    Family {
        name: "overflow",
        rules: AXIS_RULES,
    },
    Family {
        name: "overscroll",
        rules: AXIS_RULES,
    },
    Family {
        name: "gap",
        rules: AXIS_RULES,
    },
    Family {
        name: "scale",
        rules: AXIS_RULES,
    },
    Family {
        name: "border-spacing",
        rules: AXIS_RULES,
    },
    Family {
        name: "inset",
        rules: TRBL_RULES,
    },
    Family {
        name: "margin",
        rules: TRBL_RULES,
    },
    Family {
        name: "padding",
        rules: TRBL_RULES,
    },
    Family {
        name: "scroll-margin",
        rules: TRBL_RULES,
    },
    Family {
        name: "scroll-padding",
        rules: TRBL_RULES,
    },
    Family {
        name: "border",
        rules: TRBL_RULES,
    },
    Family {
        name: "border-radius",
        rules: CORNER_RULES,
    },
];

macro_rules! member {
    ($family:literal, $direction:ident) => {
        Member {
            family: $family,
            direction: Direction::$direction,
        }
    };
}

/// 工具类名 → 族成员
static MEMBERS: phf::Map<&'static str, Member> = phf_map! {
    "overflow" => member!("overflow", All),
    "overflow-x" => member!("overflow", X),
    "overflow-y" => member!("overflow", Y),

    "overscroll" => member!("overscroll", All),
    "overscroll-x" => member!("overscroll", X),
    "overscroll-y" => member!("overscroll", Y),

    "gap" => member!("gap", All),
    "gap-x" => member!("gap", X),
    "gap-y" => member!("gap", Y),

    "scale" => member!("scale", All),
    "scale-x" => member!("scale", X),
    "scale-y" => member!("scale", Y),

    "border-spacing" => member!("border-spacing", All),
    "border-spacing-x" => member!("border-spacing", X),
    "border-spacing-y" => member!("border-spacing", Y),

    "inset" => member!("inset", All),
    "inset-x" => member!("inset", X),
    "inset-y" => member!("inset", Y),
    "top" => member!("inset", Top),
    "right" => member!("inset", Right),
    "bottom" => member!("inset", Bottom),
    "left" => member!("inset", Left),

    "m" => member!("margin", All),
    "mx" => member!("margin", X),
    "my" => member!("margin", Y),
    "mt" => member!("margin", Top),
    "mr" => member!("margin", Right),
    "mb" => member!("margin", Bottom),
    "ml" => member!("margin", Left),

    "p" => member!("padding", All),
    "px" => member!("padding", X),
    "py" => member!("padding", Y),
    "pt" => member!("padding", Top),
    "pr" => member!("padding", Right),
    "pb" => member!("padding", Bottom),
    "pl" => member!("padding", Left),

    "scroll-m" => member!("scroll-margin", All),
    "scroll-mx" => member!("scroll-margin", X),
    "scroll-my" => member!("scroll-margin", Y),
    "scroll-mt" => member!("scroll-margin", Top),
    "scroll-mr" => member!("scroll-margin", Right),
    "scroll-mb" => member!("scroll-margin", Bottom),
    "scroll-ml" => member!("scroll-margin", Left),

    "scroll-p" => member!("scroll-padding", All),
    "scroll-px" => member!("scroll-padding", X),
    "scroll-py" => member!("scroll-padding", Y),
    "scroll-pt" => member!("scroll-padding", Top),
    "scroll-pr" => member!("scroll-padding", Right),
    "scroll-pb" => member!("scroll-padding", Bottom),
    "scroll-pl" => member!("scroll-padding", Left),

    "border" => member!("border", All),
    "border-x" => member!("border", X),
    "border-y" => member!("border", Y),
    "border-t" => member!("border", Top),
    "border-r" => member!("border", Right),
    "border-b" => member!("border", Bottom),
    "border-l" => member!("border", Left),

    "rounded" => member!("border-radius", All),
    "rounded-t" => member!("border-radius", Top),
    "rounded-r" => member!("border-radius", Right),
    "rounded-b" => member!("border-radius", Bottom),
    "rounded-l" => member!("border-radius", Left),
    "rounded-tl" => member!("border-radius", TopLeft),
    "rounded-tr" => member!("border-radius", TopRight),
    "rounded-br" => member!("border-radius", BottomRight),
    "rounded-bl" => member!("border-radius", BottomLeft),
};

/// 按名称查找简写族
pub fn family(name: &str) -> Option<&'static Family> {
    FAMILIES.iter().find(|f| f.name == name)
}

/// 在 base（已去掉修饰符与负号）中查找最长的成员前缀
///
/// 成员名之后必须是结尾或 `-`，因此 `rounded-t` 不会匹配 `rounded-tl-sm`。
/// 第一个 `[` / `(` 之后属于任意值，不再作为切分点。
///
/// 返回 `(成员名, 成员)`，base 去掉成员名后的剩余部分即为值。
pub fn lookup(base: &str) -> Option<(&'static str, &'static Member)> {
    if let Some((name, member)) = MEMBERS.get_entry(base) {
        return Some((*name, member));
    }

    let head_end = base.find(['[', '(']).unwrap_or(base.len());
    base[..head_end]
        .rmatch_indices('-')
        .find_map(|(idx, _)| MEMBERS.get_entry(&base[..idx]))
        .map(|(name, member)| (*name, member))
}
