//! init で書き出すファイルの内容

/// デザイントークンの存在判定に使う変数名
pub const TOKEN_MARKER: &str = "--color-bg-primary";

/// デザイントークン（CSS カスタムプロパティ）
pub const DESIGN_TOKENS_CSS: &str = r#"
/* APEX Design System - CSS Variables */
:root {
  /* Backgrounds */
  --color-bg-primary: #ffffff;
  --color-bg-secondary: #f8fafc;
  --color-bg-tertiary: #f1f5f9;
  --color-bg-inverse: #0f172a;

  /* Foregrounds */
  --color-fg-primary: #0f172a;
  --color-fg-secondary: #475569;
  --color-fg-muted: #64748b;
  --color-fg-inverse: #ffffff;
  --color-fg-disabled: #94a3b8;

  /* Borders */
  --color-border-default: #e2e8f0;
  --color-border-strong: #cbd5e1;
  --color-border-focus: #3b82f6;
  --color-border-error: #ef4444;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);
  --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);
}

.dark {
  --color-bg-primary: #0f172a;
  --color-bg-secondary: #1e293b;
  --color-bg-tertiary: #334155;
  --color-bg-inverse: #f8fafc;

  --color-fg-primary: #f8fafc;
  --color-fg-secondary: #cbd5e1;
  --color-fg-muted: #94a3b8;
  --color-fg-inverse: #0f172a;
  --color-fg-disabled: #475569;

  --color-border-default: #334155;
  --color-border-strong: #475569;
  --color-border-focus: #60a5fa;
  --color-border-error: #f87171;

  --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.3);
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.4), 0 2px 4px -2px rgb(0 0 0 / 0.3);
  --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.5), 0 4px 6px -4px rgb(0 0 0 / 0.4);
}

/* Reduced Motion Support */
@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
  }
}
"#;

/// `cn()` ヘルパー
pub const UTILS_TS: &str = r#"import { type ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

/// init でインストールする基本パッケージ
pub const BASE_PACKAGES: [&str; 3] = ["clsx", "tailwind-merge", "class-variance-authority"];
